//! Oriented bounding box and pixel-level perimeter collision.
//!
//! A scooter's body is a rotated rectangle. Collision is decided by
//! rasterizing the four edges into integer bitmap coordinates and asking
//! the track whether any of them is a wall pixel. Only the perimeter is
//! sampled; the interior is never tested.

use crate::geometry::Vec2;
use crate::track::Track;

/// The four rotated corners of a vehicle body, recomputed per query.
#[derive(Debug, Clone, Copy)]
pub struct OrientedBox {
    pub tl: Vec2,
    pub tr: Vec2,
    pub br: Vec2,
    pub bl: Vec2,
}

impl OrientedBox {
    /// Corners from center position, half extents `(width/2, length/2)`
    /// and heading. Offsets rotate by `+heading`, the same sign the
    /// forward vector uses.
    pub fn new(position: Vec2, half_extents: Vec2, heading: f64) -> Self {
        let hw = half_extents.x;
        let hl = half_extents.y;
        OrientedBox {
            tl: position + Vec2::new(-hw, hl).rotate(heading),
            tr: position + Vec2::new(hw, hl).rotate(heading),
            br: position + Vec2::new(hw, -hl).rotate(heading),
            bl: position + Vec2::new(-hw, -hl).rotate(heading),
        }
    }

    pub fn corners(&self) -> [Vec2; 4] {
        [self.tl, self.tr, self.br, self.bl]
    }
}

/// Integer coordinates along the segment `a..b`, endpoint-exclusive.
///
/// Steps along whichever axis has the larger integer delta, so steep
/// edges sample every row instead of skipping them. A zero-length
/// segment yields no points.
pub fn points_on_line(a: Vec2, b: Vec2) -> Vec<(i32, i32)> {
    let (ax, ay) = (a.x as i32, a.y as i32);
    let (bx, by) = (b.x as i32, b.y as i32);
    let dx = bx - ax;
    let dy = by - ay;
    if dx == 0 && dy == 0 {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(dx.abs().max(dy.abs()) as usize);
    if dx.abs() >= dy.abs() {
        let slope = dy as f64 / dx as f64;
        let step = if bx > ax { 1 } else { -1 };
        let mut x = ax;
        while x != bx {
            let y = (ay as f64 + slope * (x - ax) as f64).round() as i32;
            points.push((x, y));
            x += step;
        }
    } else {
        let slope = dx as f64 / dy as f64;
        let step = if by > ay { 1 } else { -1 };
        let mut y = ay;
        while y != by {
            let x = (ax as f64 + slope * (y - ay) as f64).round() as i32;
            points.push((x, y));
            y += step;
        }
    }
    points
}

/// All rasterized points on the box's four edges, in edge order
/// tl->tr, tr->br, br->bl, bl->tl. Shared corners may repeat.
pub fn perimeter_points(body: &OrientedBox) -> Vec<(i32, i32)> {
    let mut points = points_on_line(body.tl, body.tr);
    points.extend(points_on_line(body.tr, body.br));
    points.extend(points_on_line(body.br, body.bl));
    points.extend(points_on_line(body.bl, body.tl));
    points
}

/// True when any perimeter point lands on a wall pixel. Stops at the
/// first hit.
pub fn hits_wall(body: &OrientedBox, track: &Track) -> bool {
    perimeter_points(body)
        .iter()
        .any(|&(x, y)| track.is_wall(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    fn axis_aligned_box() -> OrientedBox {
        OrientedBox::new(Vec2::ZERO, Vec2::new(5.0, 10.0), 0.0)
    }

    #[test]
    fn corners_at_zero_heading() {
        let body = axis_aligned_box();
        assert_eq!(body.tl, Vec2::new(-5.0, 10.0));
        assert_eq!(body.tr, Vec2::new(5.0, 10.0));
        assert_eq!(body.br, Vec2::new(5.0, -10.0));
        assert_eq!(body.bl, Vec2::new(-5.0, -10.0));
    }

    #[test]
    fn corners_are_point_symmetric() {
        let position = Vec2::new(42.0, 17.0);
        let body = OrientedBox::new(position, Vec2::new(5.0, 10.0), 1.1);
        let tl = body.tl - position;
        let br = body.br - position;
        let tr = body.tr - position;
        let bl = body.bl - position;
        assert_approx_eq!(tl.x, -br.x, 1e-9);
        assert_approx_eq!(tl.y, -br.y, 1e-9);
        assert_approx_eq!(tr.x, -bl.x, 1e-9);
        assert_approx_eq!(tr.y, -bl.y, 1e-9);
    }

    #[test]
    fn corners_follow_heading_rotation() {
        let body = OrientedBox::new(Vec2::ZERO, Vec2::new(5.0, 10.0), FRAC_PI_2);
        // Quarter turn counterclockwise: (-5, 10) -> (-10, -5).
        assert_approx_eq!(body.tl.x, -10.0, 1e-9);
        assert_approx_eq!(body.tl.y, -5.0, 1e-9);
    }

    #[test]
    fn rasterized_rectangle_bounds_its_edges() {
        let points = perimeter_points(&axis_aligned_box());
        assert_eq!(points.len(), 60); // 10 + 20 + 10 + 20

        assert_eq!(points.iter().map(|p| p.0).min(), Some(-5));
        assert_eq!(points.iter().map(|p| p.0).max(), Some(5));
        assert_eq!(points.iter().map(|p| p.1).min(), Some(-10));
        assert_eq!(points.iter().map(|p| p.1).max(), Some(10));

        // One sample from each edge.
        assert!(points.contains(&(0, 10)));
        assert!(points.contains(&(5, 0)));
        assert!(points.contains(&(0, -10)));
        assert!(points.contains(&(-5, 0)));
    }

    #[test]
    fn steep_lines_sample_every_row() {
        let points = points_on_line(Vec2::new(0.0, 0.0), Vec2::new(1.0, 10.0));
        assert_eq!(points.len(), 10);
        for (i, &(_, y)) in points.iter().enumerate() {
            assert_eq!(y, i as i32);
        }
    }

    #[test]
    fn degenerate_edge_yields_nothing() {
        let p = Vec2::new(3.2, 3.9);
        assert!(points_on_line(p, p).is_empty());
    }

    #[test]
    fn wall_on_perimeter_collides_interior_does_not() {
        let blank = vec![[255, 255, 255, 255]; 40 * 40];
        let body = OrientedBox::new(Vec2::new(20.0, 20.0), Vec2::new(3.0, 5.0), 0.0);

        let free = Track::from_rgba(40, 40, blank.clone()).unwrap();
        assert!(!hits_wall(&body, &free));

        // Pixel on the top edge.
        let mut pixels = blank.clone();
        pixels[25 * 40 + 19] = [0, 0, 0, 255];
        let walled = Track::from_rgba(40, 40, pixels).unwrap();
        assert!(hits_wall(&body, &walled));

        // Pixel dead center is never sampled.
        let mut pixels = blank;
        pixels[20 * 40 + 20] = [0, 0, 0, 255];
        let centered = Track::from_rgba(40, 40, pixels).unwrap();
        assert!(!hits_wall(&body, &centered));
    }
}
