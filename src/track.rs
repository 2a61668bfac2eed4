//! Bitmap track: a read-only wall oracle over a decoded RGBA grid.
//!
//! The image on disk is display-oriented (row 0 at the top). At load time
//! the rows are flipped once into the Y-up world frame that all geometry
//! uses; the unflipped image is only ever blitted to the screen.

use crate::error::TrackError;
use macroquad::texture::Image;

/// Immutable track bitmap in world orientation (row 0 = bottom edge).
pub struct Track {
    width: i32,
    height: i32,
    pixels: Vec<[u8; 4]>,
}

impl Track {
    /// Builds a track from world-oriented RGBA pixels (row 0 = bottom).
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self, TrackError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TrackError::SizeMismatch {
                got: pixels.len(),
                expected,
                width,
                height,
            });
        }
        Ok(Track {
            width: width as i32,
            height: height as i32,
            pixels,
        })
    }

    /// Builds a track from a display-oriented image, flipping rows into
    /// the world frame.
    pub fn from_image(image: &Image) -> Result<Self, TrackError> {
        let width = image.width();
        let height = image.height();
        let data = image.get_image_data();
        let mut pixels = Vec::with_capacity(width * height);
        for world_row in 0..height {
            let image_row = height - 1 - world_row;
            pixels.extend_from_slice(&data[image_row * width..(image_row + 1) * width]);
        }
        Track::from_rgba(width as u32, height as u32, pixels)
    }

    /// Decodes image bytes into a world-oriented track plus the raw
    /// display-oriented image for blitting.
    pub fn decode(bytes: &[u8]) -> Result<(Self, Image), TrackError> {
        let image = Image::from_file_with_format(bytes, None)
            .map_err(|e| TrackError::Decode(format!("{e:?}")))?;
        let track = Track::from_image(&image)?;
        Ok((track, image))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Wall test for body collisions: RGB black, alpha ignored.
    /// Off-map counts as wall so nothing drives off the bitmap silently.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        match self.pixel(x, y) {
            Some([r, g, b, _]) => r == 0 && g == 0 && b == 0,
            None => true,
        }
    }

    /// Wall test for ray sensors: exactly opaque black `(0,0,0,255)`.
    /// Stricter than `is_wall` on purpose; translucent black pixels stop
    /// bodies but not rays, and trained agents depend on that.
    pub fn is_opaque_wall(&self, x: i32, y: i32) -> bool {
        match self.pixel(x, y) {
            Some(rgba) => rgba == [0, 0, 0, 255],
            None => true,
        }
    }
}
