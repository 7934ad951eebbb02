use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel grid needs {} colours but {} were supplied",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Square grid of colours, one per pixel, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    resolution: Resolution,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![Colour::BLACK; resolution.pixel_count()],
        }
    }

    pub fn from_colours(
        resolution: Resolution,
        pixels: Vec<Colour>,
    ) -> Result<Self, PixelBufferError> {
        let expected = resolution.pixel_count();

        if expected != pixels.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self { resolution, pixels })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.resolution.contains_point(point) {
            return None;
        }

        Some(self.pixels[self.resolution.index_of(point)])
    }
}
