//! Ray-cast danger sensors.
//!
//! Each scooter carries three simulated distance sensors: straight ahead
//! and 45 degrees to either side. A ray marches from the scooter center
//! in unit steps, starting a few units out so it cannot hit the scooter's
//! own body, and stops at the first exactly-opaque-black pixel. Readings
//! are normalized to `[0, 1]` where 1 means a wall at point-blank range;
//! that vector of three floats is the state a decision policy consumes.

use crate::config::{MAX_CAST_RANGE, MIN_CAST_OFFSET, SENSOR_SPREAD};
use crate::geometry::{Vec2, normalize_angle};
use crate::track::Track;

pub const SENSOR_COUNT: usize = 3;

/// Outcome of a single cast: where the ray stopped and how far it got.
/// `position` is `None` when nothing was hit within `max_range`.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub position: Option<Vec2>,
    pub distance: f64,
}

/// Marches a ray from `origin` along `angle` (world heading convention)
/// and returns the first wall hit, or a max-range miss.
pub fn cast_ray(origin: Vec2, angle: f64, max_range: u32, track: &Track) -> RayHit {
    let dir = Vec2::from_angle(angle);
    for step in MIN_CAST_OFFSET..=max_range {
        let point = origin + dir * step as f64;
        if track.is_opaque_wall(point.x as i32, point.y as i32) {
            return RayHit {
                position: Some(point),
                distance: step as f64,
            };
        }
    }
    RayHit {
        position: None,
        distance: max_range as f64,
    }
}

/// Relative sensor angles in reading order: forward, left 45, right 45.
pub fn sensor_angles() -> [f64; SENSOR_COUNT] {
    [0.0, SENSOR_SPREAD, -SENSOR_SPREAD]
}

/// The three normalized danger readings for a scooter at `origin` facing
/// `heading`: `1 - distance / max_range`, each in `[0, 1]`.
pub fn danger_readings(origin: Vec2, heading: f64, track: &Track) -> [f64; SENSOR_COUNT] {
    let mut readings = [0.0; SENSOR_COUNT];
    for (reading, relative) in readings.iter_mut().zip(sensor_angles()) {
        let hit = cast_ray(origin, normalize_angle(heading + relative), MAX_CAST_RANGE, track);
        *reading = 1.0 - hit.distance / MAX_CAST_RANGE as f64;
    }
    crate::debug_sensor!(
        "readings at ({:.1}, {:.1}) heading {:.3}: [{:.3}, {:.3}, {:.3}]",
        origin.x,
        origin.y,
        heading,
        readings[0],
        readings[1],
        readings[2]
    );
    readings
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    const SIDE: u32 = 256;

    fn blank() -> Vec<[u8; 4]> {
        vec![[255, 255, 255, 255]; SIDE as usize * SIDE as usize]
    }

    fn with_pixel(x: usize, y: usize, rgba: [u8; 4]) -> Track {
        let mut pixels = blank();
        pixels[y * SIDE as usize + x] = rgba;
        Track::from_rgba(SIDE, SIDE, pixels).unwrap()
    }

    #[test]
    fn open_track_reads_max_range() {
        let track = Track::from_rgba(SIDE, SIDE, blank()).unwrap();
        let hit = cast_ray(Vec2::new(128.0, 128.0), 0.0, MAX_CAST_RANGE, &track);
        assert!(hit.position.is_none());
        assert_approx_eq!(hit.distance, MAX_CAST_RANGE as f64);
    }

    #[test]
    fn wall_ahead_is_hit_at_its_distance() {
        // Heading 0 points up: a wall 40 units above the origin.
        let track = with_pixel(128, 168, [0, 0, 0, 255]);
        let origin = Vec2::new(128.0, 128.0);
        let hit = cast_ray(origin, 0.0, MAX_CAST_RANGE, &track);

        assert!((hit.distance - 40.0).abs() <= 1.0);
        let position = hit.position.expect("ray should hit");
        assert_approx_eq!(position.x, 128.0, 1.0);
        assert_approx_eq!(position.y, 168.0, 1.0);
    }

    #[test]
    fn ray_starts_past_the_body_offset() {
        // A wall closer than the minimum offset is invisible to the ray.
        let track = with_pixel(128, 129, [0, 0, 0, 255]);
        let hit = cast_ray(Vec2::new(128.0, 128.0), 0.0, MAX_CAST_RANGE, &track);
        assert!(hit.position.is_none());
    }

    #[test]
    fn translucent_black_does_not_stop_rays() {
        let track = with_pixel(128, 168, [0, 0, 0, 254]);
        let hit = cast_ray(Vec2::new(128.0, 128.0), 0.0, MAX_CAST_RANGE, &track);
        assert!(hit.position.is_none());
        assert_approx_eq!(hit.distance, MAX_CAST_RANGE as f64);
    }

    #[test]
    fn readings_are_normalized_and_ordered() {
        // Wall straight ahead at 20 units, sides open.
        let track = with_pixel(128, 148, [0, 0, 0, 255]);
        let readings = danger_readings(Vec2::new(128.0, 128.0), 0.0, &track);

        assert_approx_eq!(readings[0], 1.0 - 20.0 / MAX_CAST_RANGE as f64, 0.02);
        assert_approx_eq!(readings[1], 0.0);
        assert_approx_eq!(readings[2], 0.0);
        for reading in readings {
            assert!((0.0..=1.0).contains(&reading));
        }
    }

    #[test]
    fn side_sensors_look_45_degrees_out() {
        // Wall block up-left on the diagonal; only the left sensor sees it.
        let mut pixels = blank();
        for y in 141..=143 {
            for x in 112..=114 {
                pixels[y * SIDE as usize + x] = [0, 0, 0, 255];
            }
        }
        let track = Track::from_rgba(SIDE, SIDE, pixels).unwrap();
        let readings = danger_readings(Vec2::new(128.0, 128.0), 0.0, &track);

        assert_approx_eq!(readings[0], 0.0);
        assert!(readings[1] > 0.7);
        assert_approx_eq!(readings[2], 0.0);
    }
}
