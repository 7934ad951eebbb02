use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
use crate::core::fractals::mandelbrot::palette::Palette;
use std::error::Error;
use std::fmt;

/// How the renderer walks the pixel grid. Both produce the same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepStrategy {
    /// One pass on the calling thread.
    #[default]
    Sequential,
    /// Pixels spread over rayon's global pool; the buffer is still handed back whole.
    Parallel,
}

impl SweepStrategy {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one complete Mandelbrot frame.
///
/// The palette is built once for the call and shared by every pixel.
pub fn render_mandelbrot(
    viewport: Viewport,
    resolution: Resolution,
    max_iterations: MaxIterations,
    sweep: SweepStrategy,
) -> Result<PixelBuffer, RenderError> {
    let palette = Palette::build(max_iterations);
    let algorithm = MandelbrotAlgorithm::new(viewport, resolution, max_iterations);

    let iterations = match sweep {
        SweepStrategy::Sequential => generate_fractal(&algorithm),
        SweepStrategy::Parallel => generate_fractal_rayon(&algorithm),
    };

    Ok(generate_pixel_buffer(iterations, &palette, resolution)?)
}
