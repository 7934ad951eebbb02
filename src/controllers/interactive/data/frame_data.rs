use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
use std::time::Duration;

/// A finished render on its way to the display.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
    pub viewport: Viewport,
    pub max_iterations: MaxIterations,
}

impl FrameData {
    /// Short overlay text reporting how long the render took.
    #[must_use]
    pub fn status_message(&self) -> String {
        format!("done in {}ms.", self.render_duration.as_millis())
    }
}
