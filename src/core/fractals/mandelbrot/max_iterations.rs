use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::fmt;

/// Upper bound on escape-time iterations for one render. Always at least one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxIterations(u32);

impl MaxIterations {
    /// Depth used for the first frame of a session.
    pub const INITIAL: Self = Self(50);
    /// Deepest a zoom may push the session by default. The palette holds one colour per step.
    pub const DEFAULT_CEILING: Self = Self(100_000);

    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self(max_iterations))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MaxIterations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
