// Custom logger: colored levels, timestamps, and per-topic debug filters.

use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

#[derive(Debug)]
struct RallyLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for RallyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug/trace lines are gated by topic when filters are set.
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m",
            log::Level::Warn => "\x1B[33m",
            log::Level::Info => "\x1B[32m",
            log::Level::Debug => "\x1B[36m",
            log::Level::Trace => "\x1B[35m",
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let mut stdout = io::stdout();
        let _ = writeln!(
            stdout,
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        );
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<RallyLogger> = OnceLock::new();

/// Installs the logger. `debug_filter` is a comma-separated list of debug
/// topics (`scooter`, `sensor`, `game`); absent means all topics.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect::<HashSet<String>>()
    });

    let logger = LOGGER.get_or_init(|| RallyLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Topic helper macros.
#[macro_export]
macro_rules! debug_scooter {
    ($id:expr, $($arg:tt)*) => {
        log::debug!(target: "scooter", "[S{:02}] {}", $id, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_sensor {
    ($($arg:tt)*) => {
        log::debug!(target: "sensor", "{}", format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_game {
    ($($arg:tt)*) => {
        log::debug!(target: "game", "{}", format_args!($($arg)*))
    };
}
