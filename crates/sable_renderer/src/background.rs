//! Radiance for rays that miss every sphere.

use crate::{BackgroundSampler, Color};

/// What a missed ray sees.
#[derive(Clone, Copy)]
pub enum Background<'a> {
    /// A constant color.
    Solid(Color),
    /// A plate stretched over the whole frame.
    ///
    /// Pixels whose mapped coordinate falls outside the plate use
    /// `fallback`, quantized to 8 bits per channel.
    Image {
        sampler: &'a dyn BackgroundSampler,
        fallback: Color,
    },
}

impl<'a> Background<'a> {
    /// Radiance at output pixel (i, j) of a `width` x `height` frame.
    ///
    /// The plate is stretched to the frame and mirrored horizontally: output
    /// column `i` reads plate column `(width - i) / width * plate_width`. The
    /// leftmost column therefore maps one past the plate's right edge and
    /// gets the fallback color.
    pub fn radiance(&self, i: u32, j: u32, width: u32, height: u32) -> Color {
        match *self {
            Background::Solid(color) => color,
            Background::Image { sampler, fallback } => {
                let (plate_w, plate_h) = sampler.dimensions();
                let bx = (width - i) as f32 / width as f32 * plate_w as f32;
                let by = j as f32 / height as f32 * plate_h as f32;

                let rgb = sampler
                    .sample(bx as i64, by as i64)
                    .unwrap_or_else(|| quantize(fallback));
                Color::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
            }
        }
    }
}

impl Default for Background<'_> {
    fn default() -> Self {
        Background::Solid(Color::new(0.2, 0.7, 0.8))
    }
}

impl std::fmt::Debug for Background<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Background::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Background::Image { sampler, fallback } => f
                .debug_struct("Image")
                .field("dimensions", &sampler.dimensions())
                .field("fallback", fallback)
                .finish(),
        }
    }
}

/// Truncate each channel to an 8-bit value.
fn quantize(color: Color) -> [u8; 3] {
    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    ]
}
