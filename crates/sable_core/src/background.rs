//! Background plates.
//!
//! A background plate is an image that rays which miss every sphere sample
//! from. The renderer only needs pixel lookups, so plates are exposed
//! through the [`BackgroundSampler`] trait and stored as packed 8-bit RGB.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while loading a background plate.
#[derive(Error, Debug)]
pub enum BackgroundError {
    #[error("Failed to load background {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Background {path} has no pixels")]
    Empty { path: String },

    #[error("Background buffer holds {actual} bytes, expected {expected} ({width}x{height}x{channels})")]
    InvalidBuffer {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
}

pub type BackgroundResult<T> = Result<T, BackgroundError>;

/// Read-only pixel lookup into a background plate.
pub trait BackgroundSampler: Send + Sync {
    /// Plate size in pixels as (width, height).
    fn dimensions(&self) -> (u32, u32);

    /// RGB bytes at pixel (x, y), or `None` outside the plate.
    fn sample(&self, x: i64, y: i64) -> Option<[u8; 3]>;
}

/// A decoded background image in row-major RGB8.
#[derive(Clone, Debug)]
pub struct BackgroundImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,

    /// Original file path (for debugging)
    pub path: String,
}

impl BackgroundImage {
    /// Decode an image file.
    ///
    /// Any format the `image` crate was built with is accepted; grey and
    /// alpha channels are converted to plain RGB.
    pub fn open(path: impl AsRef<Path>) -> BackgroundResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let img = image::open(path).map_err(|source| BackgroundError::Load {
            path: display.clone(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(BackgroundError::Empty { path: display });
        }

        log::debug!("Loaded background: {} ({}x{})", display, width, height);

        Ok(Self {
            width,
            height,
            pixels: rgb.into_raw(),
            path: display,
        })
    }

    /// Build a plate from a raw row-major buffer with `channels` bytes per
    /// pixel.
    ///
    /// The first three channels of each pixel are read as R, G, B; extra
    /// channels (alpha) are dropped. Fewer than three channels are rejected.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: u8,
        data: &[u8],
    ) -> BackgroundResult<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if channels < 3 || data.len() != expected {
            return Err(BackgroundError::InvalidBuffer {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }

        let pixels = data
            .chunks_exact(channels as usize)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
            path: "<memory>".to_string(),
        })
    }

    /// Get total size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.pixels.len()
    }
}

impl BackgroundSampler for BackgroundImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn sample(&self, x: i64, y: i64) -> Option<[u8; 3]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }

        let idx = (x as usize + y as usize * self.width as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|px| [px[0], px[1], px[2]])
    }
}
