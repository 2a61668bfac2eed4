mod assets;
mod collision;
mod config;
mod control;
mod error;
mod game;
mod geometry;
mod logging;
mod render;
mod scooter;
mod sensors;
mod track;

use clap::{Parser, ValueEnum};
use control::{DecisionSource, HumanInput, ScriptedPolicy};
use error::TrackError;
use log::{LevelFilter, error, info, warn};
use macroquad::prelude::*;
use std::fs;
use std::process;
use track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ControlMode {
    /// Steer with A/D or the arrow keys.
    Human,
    /// Let the built-in sensor policy drive.
    Scripted,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Track bitmap (PNG); black pixels are walls. Uses the bundled track
    /// when omitted.
    #[arg(long)]
    track: Option<String>,

    /// Number of scooters to spawn.
    #[arg(long, default_value_t = 1)]
    scooters: usize,

    /// Who does the steering.
    #[arg(long, value_enum, default_value = "human")]
    mode: ControlMode,

    /// Draw the danger sensor rays.
    #[arg(long)]
    show_rays: bool,

    /// Debug filter to pick log topics (e.g. "scooter,sensor,game")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn load_track_bytes(path: Option<&str>) -> Result<Vec<u8>, TrackError> {
    match path {
        Some(path) => Ok(fs::read(path)?),
        None => Ok(assets::track_bytes(assets::DEFAULT_TRACK)?.into_owned()),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Scooter Rally".to_owned(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Scooter Rally...");

    let bytes = match load_track_bytes(args.track.as_deref()) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Error loading track: {}", e);
            process::exit(1);
        }
    };
    let (track, display_image) = match Track::decode(&bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("Error decoding track: {}", e);
            process::exit(1);
        }
    };
    info!("Track loaded: {}x{} pixels.", track.width(), track.height());

    let count = args.scooters.clamp(1, config::MAX_SCOOTERS);
    if count != args.scooters {
        warn!("Scooter count {} out of range, using {}.", args.scooters, count);
    }
    let drivers: Vec<Box<dyn DecisionSource>> = (0..count)
        .map(|_| match args.mode {
            ControlMode::Human => Box::new(HumanInput) as Box<dyn DecisionSource>,
            ControlMode::Scripted => Box::new(ScriptedPolicy::new()) as Box<dyn DecisionSource>,
        })
        .collect();
    info!("Spawning {} scooter(s) in {:?} mode.", count, args.mode);

    let mut game = game::Game::new(track, drivers);
    let mut renderer = render::Renderer::new(&display_image, args.show_rays);

    game.run(&mut renderer).await;
}
