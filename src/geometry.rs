//! 2D vector math for the simulation core.
//!
//! World convention used everywhere: Y-up, heading 0 points straight up
//! (+y), positive headings turn counterclockwise. `Vec2::from_angle`
//! follows that convention; the same sign is applied to bounding-box
//! rotation and ray directions so travel, body, and sensors never disagree.

use std::f64::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

/// Wraps an angle in radians into `[0, 2*PI)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Immutable 2D point/direction. All operations return new values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Unit vector for a heading: `(-sin a, cos a)`, so heading 0 is "up".
    pub fn from_angle(angle: f64) -> Self {
        Vec2::new(-angle.sin(), angle.cos())
    }

    /// Unit vector along the x-axis convention: `(cos a, sin a)`.
    #[allow(dead_code)]
    pub fn from_angle_x_axis(angle: f64) -> Self {
        Vec2::new(angle.cos(), angle.sin())
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[allow(dead_code)]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Rotates counterclockwise by `radians` (standard rotation matrix).
    pub fn rotate(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Length of `other`'s component along `self`. Zero when `self` is
    /// degenerate.
    #[allow(dead_code)]
    pub fn scalar_projection(self, other: Vec2) -> f64 {
        let len = self.length();
        if len <= f64::EPSILON {
            return 0.0;
        }
        self.dot(other) / len
    }

    /// Component of `other` along `self`. Zero vector when `self` is
    /// degenerate.
    #[allow(dead_code)]
    pub fn vector_projection(self, other: Vec2) -> Vec2 {
        let len_sq = self.length_sq();
        if len_sq <= f64::EPSILON {
            return Vec2::ZERO;
        }
        self * (self.dot(other) / len_sq)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
