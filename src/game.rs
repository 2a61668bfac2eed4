//! Simulation context and the fixed-timestep game loop.
//!
//! One tick per scooter: kinematics step, perimeter collision against the
//! track, checkpoint scoring, then a fresh sensor sweep feeding the
//! scooter's decision source for the next tick. The run ends when no
//! scooter is alive.

use crate::collision::hits_wall;
use crate::config;
use crate::control::DecisionSource;
use crate::geometry::Vec2;
use crate::render::Renderer;
use crate::scooter::Scooter;
use crate::sensors::danger_readings;
use crate::track::Track;
use log::info;
use macroquad::prelude::{KeyCode, get_frame_time, is_key_pressed, next_frame};
use rand::prelude::*;

/// Circular target zone scooters must reach in sequence.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pub center: Vec2,
    pub radius: f64,
}

/// Everything one run owns: the track, the scooters, their drivers, and
/// the checkpoint course. No global state; ticks mutate only this.
pub struct Game {
    pub track: Track,
    pub scooters: Vec<Scooter>,
    drivers: Vec<Box<dyn DecisionSource>>,
    pub checkpoints: Vec<Checkpoint>,
    pub ticks: u64,
    time_accumulator: f32,
    tick_duration: f32,
    game_over: bool,
}

impl Game {
    /// One scooter per driver, spawned at the start line. Packs get a
    /// little horizontal scatter so they don't overlap exactly.
    pub fn new(track: Track, drivers: Vec<Box<dyn DecisionSource>>) -> Self {
        let mut rng = thread_rng();
        let scooters = (0..drivers.len())
            .map(|i| {
                let jitter = if i == 0 {
                    0.0
                } else {
                    rng.gen_range(-config::SPAWN_JITTER..=config::SPAWN_JITTER)
                };
                Scooter::new(Vec2::new(config::START_X + jitter, config::START_Y))
            })
            .collect();
        let checkpoints = config::CHECKPOINTS
            .iter()
            .map(|&(x, y)| Checkpoint {
                center: Vec2::new(x, y),
                radius: config::CHECKPOINT_RADIUS,
            })
            .collect();

        Game {
            track,
            scooters,
            drivers,
            checkpoints,
            ticks: 0,
            time_accumulator: 0.0,
            tick_duration: 1.0 / config::TICKS_PER_SECOND as f32,
            game_over: false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Advances the simulation by `delta` seconds.
    pub fn tick(&mut self, delta: f64) {
        let mut any_alive = false;
        for (id, (scooter, driver)) in self
            .scooters
            .iter_mut()
            .zip(self.drivers.iter_mut())
            .enumerate()
        {
            if !scooter.alive {
                continue;
            }
            any_alive = true;

            scooter.step(delta);

            if hits_wall(&scooter.bounding_box(), &self.track) {
                scooter.crash();
                scooter.score += config::CRASH_PENALTY;
                crate::debug_scooter!(
                    id,
                    "crashed at ({:.1}, {:.1}), score {}",
                    scooter.position.x,
                    scooter.position.y,
                    scooter.score
                );
                continue;
            }

            if let Some(target) = self.checkpoints.get(scooter.next_checkpoint) {
                let offset = target.center - scooter.position;
                if offset.length_sq() < target.radius * target.radius {
                    scooter.score += config::CHECKPOINT_REWARD;
                    scooter.next_checkpoint =
                        (scooter.next_checkpoint + 1) % self.checkpoints.len();
                    crate::debug_scooter!(
                        id,
                        "checkpoint reached, next {} score {}",
                        scooter.next_checkpoint,
                        scooter.score
                    );
                }
            }

            let state = danger_readings(scooter.position, scooter.heading, &self.track);
            let action = driver.choose_action(state);
            scooter.set_steering(action.input());
        }

        self.ticks += 1;
        if !any_alive {
            self.game_over = true;
            crate::debug_game!("no scooters alive after tick {}", self.ticks);
        }
    }

    /// Runs the real-time loop until every scooter is dead or the player
    /// quits, then holds on a final announcement frame.
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");

        let delta = self.tick_duration as f64;
        let mut aborted = false;
        while !self.is_over() {
            if is_key_pressed(KeyCode::Escape) {
                aborted = true;
                break;
            }

            self.time_accumulator += get_frame_time();
            while self.time_accumulator >= self.tick_duration {
                self.time_accumulator -= self.tick_duration;
                self.tick(delta);
                if self.game_over {
                    break;
                }
            }

            renderer.draw_frame(self, None);
            next_frame().await;
        }

        let scores: Vec<String> = self.scooters.iter().map(|s| s.score.to_string()).collect();
        info!("Scores: {}", scores.join(", "));

        if !aborted {
            let best = self.scooters.iter().map(|s| s.score).max().unwrap_or(0);
            let announcement =
                format!("All scooters crashed! Best score: {best} (Esc to quit)");
            while !is_key_pressed(KeyCode::Escape) {
                renderer.draw_frame(self, Some(&announcement));
                next_frame().await;
            }
        }
        info!("Exiting Scooter Rally.");
    }
}
