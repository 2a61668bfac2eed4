//! Tuning constants for the scooter rally prototype.

use std::f64::consts::FRAC_PI_4;

// Window / simulation pacing
pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 800;
pub const TICKS_PER_SECOND: u32 = 60;

// Scooter geometry and handling
pub const SCOOTER_WIDTH: f64 = 10.0;
pub const SCOOTER_LENGTH: f64 = 20.0;
pub const SCOOTER_SPEED: f64 = 60.0; // world units per second
pub const STEERING_RATE: f64 = 3.0; // radians per second at full lock
pub const START_X: f64 = 100.0;
pub const START_Y: f64 = 400.0;
pub const SPAWN_JITTER: f64 = 30.0; // horizontal scatter when spawning a pack
pub const MAX_SCOOTERS: usize = 16;

// Danger sensors
pub const MAX_CAST_RANGE: u32 = 100; // world units
pub const MIN_CAST_OFFSET: u32 = 3; // skip the scooter's own body
pub const SENSOR_SPREAD: f64 = FRAC_PI_4; // side rays at +/- 45 degrees
pub const SCRIPTED_CAUTION: f64 = 0.55; // danger level that makes the built-in policy swerve

// Scoring
pub const CRASH_PENALTY: i32 = -20;
pub const CHECKPOINT_REWARD: i32 = 5;
pub const CHECKPOINT_RADIUS: f64 = 80.0;
pub const CHECKPOINTS: [(f64, f64); 5] = [
    (120.0, 700.0),
    (700.0, 660.0),
    (290.0, 500.0),
    (690.0, 250.0),
    (150.0, 200.0),
];
