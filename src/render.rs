//! macroquad renderer.
//!
//! Draws the display-oriented track image as-is and converts world
//! coordinates (Y-up) to screen coordinates (Y-down) for everything else.
//! Reads scooter corners, liveness, and scores; never mutates simulation
//! state.

use crate::config::MAX_CAST_RANGE;
use crate::game::Game;
use crate::geometry::{Vec2 as WorldVec2, normalize_angle};
use crate::scooter::Scooter;
use crate::sensors::{cast_ray, sensor_angles};
use macroquad::prelude::*;

const CHECKPOINT_NEXT: Color = Color::new(0.0, 0.2, 1.0, 0.5);
const CHECKPOINT_IDLE: Color = Color::new(0.0, 0.2, 1.0, 0.2);

pub struct Renderer {
    track_texture: Texture2D,
    track_height: f32,
    show_rays: bool,
}

impl Renderer {
    pub fn new(display_image: &Image, show_rays: bool) -> Self {
        let track_texture = Texture2D::from_image(display_image);
        track_texture.set_filter(FilterMode::Nearest);
        Renderer {
            track_height: display_image.height() as f32,
            track_texture,
            show_rays,
        }
    }

    fn to_screen(&self, p: WorldVec2) -> Vec2 {
        vec2(p.x as f32, self.track_height - p.y as f32)
    }

    pub fn draw_frame(&self, game: &Game, announcement: Option<&str>) {
        clear_background(WHITE);
        draw_texture(&self.track_texture, 0.0, 0.0, WHITE);

        self.draw_checkpoints(game);
        for scooter in &game.scooters {
            self.draw_scooter(scooter);
            if self.show_rays && scooter.alive {
                self.draw_rays(game, scooter);
            }
        }
        self.draw_hud(game);

        if let Some(text) = announcement {
            self.draw_announcement(text);
        }
    }

    fn draw_checkpoints(&self, game: &Game) {
        let next = game.scooters.first().map(|s| s.next_checkpoint);
        for (i, checkpoint) in game.checkpoints.iter().enumerate() {
            let center = self.to_screen(checkpoint.center);
            let color = if Some(i) == next {
                CHECKPOINT_NEXT
            } else {
                CHECKPOINT_IDLE
            };
            draw_circle(center.x, center.y, checkpoint.radius as f32, color);
        }
    }

    fn draw_scooter(&self, scooter: &Scooter) {
        let [tl, tr, br, bl] = scooter.bounding_box().corners().map(|c| self.to_screen(c));
        let color = if scooter.alive { GREEN } else { RED };
        draw_triangle(tl, tr, br, color);
        draw_triangle(tl, br, bl, color);
    }

    fn draw_rays(&self, game: &Game, scooter: &Scooter) {
        for relative in sensor_angles() {
            let angle = normalize_angle(scooter.heading + relative);
            let hit = cast_ray(scooter.position, angle, MAX_CAST_RANGE, &game.track);
            let end = hit.position.unwrap_or_else(|| {
                scooter.position + WorldVec2::from_angle(angle) * MAX_CAST_RANGE as f64
            });
            let danger = (1.0 - hit.distance / MAX_CAST_RANGE as f64) as f32;
            let color = Color::new(danger, 1.0 - danger, 0.0, 0.9);
            let from = self.to_screen(scooter.position);
            let to = self.to_screen(end);
            draw_line(from.x, from.y, to.x, to.y, 1.0, color);
        }
    }

    fn draw_hud(&self, game: &Game) {
        for (i, scooter) in game.scooters.iter().enumerate() {
            let status = if scooter.alive { "riding" } else { "crashed" };
            let line = format!("Scooter {}: {} ({})", i + 1, scooter.score, status);
            draw_text(&line, 10.0, 22.0 + i as f32 * 22.0, 24.0, DARKGRAY);
        }
    }

    fn draw_announcement(&self, text: &str) {
        let size = measure_text(text, None, 40, 1.0);
        let x = (screen_width() - size.width) / 2.0;
        let y = screen_height() / 2.0;
        draw_rectangle(
            x - 20.0,
            y - size.height - 14.0,
            size.width + 40.0,
            size.height + 28.0,
            Color::new(0.0, 0.0, 0.0, 0.7),
        );
        draw_text(text, x, y, 40.0, WHITE);
    }
}
