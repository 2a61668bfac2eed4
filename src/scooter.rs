//! Scooter state and kinematics.

use crate::collision::OrientedBox;
use crate::config;
use crate::geometry::{Vec2, normalize_angle};

/// One vehicle in the simulation. Mutated once per tick by the kinematics
/// step, then by the collision check; `alive` only ever goes false.
#[derive(Debug, Clone)]
pub struct Scooter {
    pub position: Vec2,
    pub half_extents: Vec2, // (width/2, length/2)
    pub heading: f64,       // radians in [0, 2*PI), 0 = up
    pub speed: f64,
    pub steering: f64, // -1 full right .. +1 full left
    pub steering_rate: f64,
    pub alive: bool,
    pub next_checkpoint: usize,
    pub score: i32,
}

impl Scooter {
    pub fn new(position: Vec2) -> Self {
        Scooter {
            position,
            half_extents: Vec2::new(config::SCOOTER_WIDTH / 2.0, config::SCOOTER_LENGTH / 2.0),
            heading: 0.0,
            speed: config::SCOOTER_SPEED,
            steering: 0.0,
            steering_rate: config::STEERING_RATE,
            alive: true,
            next_checkpoint: 0,
            score: 0,
        }
    }

    /// Stores a heading, wrapped into `[0, 2*PI)`.
    pub fn set_heading(&mut self, heading: f64) {
        self.heading = normalize_angle(heading);
    }

    /// Steering input is nominally -1, 0 or +1; anything else is clamped.
    pub fn set_steering(&mut self, input: f64) {
        self.steering = input.clamp(-1.0, 1.0);
    }

    /// Integrates heading then position over `delta` seconds. Dead
    /// scooters do not move.
    pub fn step(&mut self, delta: f64) {
        if !self.alive {
            return;
        }
        self.set_heading(self.heading + self.steering * delta * self.steering_rate);
        self.position = self.position + Vec2::from_angle(self.heading) * (delta * self.speed);
    }

    /// The rotated body rectangle, derived fresh from the current pose.
    pub fn bounding_box(&self) -> OrientedBox {
        OrientedBox::new(self.position, self.half_extents, self.heading)
    }

    pub fn crash(&mut self) {
        self.alive = false;
    }
}
