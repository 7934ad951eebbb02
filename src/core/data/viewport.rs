use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSpan { span: f64 },
    InvalidCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan { span } => {
                write!(f, "viewport span must be positive and finite: {}", span)
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Square window of the complex plane mapped onto the pixel grid.
///
/// `span` is the side length of the window along both axes, so the visible region is
/// `center ± span / 2` on each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    span: f64,
}

impl Viewport {
    pub fn new(center: Complex, span: f64) -> Result<Self, ViewportError> {
        if !span.is_finite() || span <= 0.0 {
            return Err(ViewportError::InvalidSpan { span });
        }

        if !center.is_finite() {
            return Err(ViewportError::InvalidCenter { center });
        }

        Ok(Self { center, span })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Upper-left corner of the window: smallest real part, largest imaginary part.
    #[must_use]
    pub fn top_left(&self) -> Complex {
        let half = self.span / 2.0;
        Complex::new(self.center.real - half, self.center.imag + half)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        let half = self.span / 2.0;
        Complex::new(self.center.real + half, self.center.imag - half)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "center ({}, {}) span {}",
            self.center.real, self.center.imag, self.span
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(Complex::new(-0.5, 0.25), 4.0).unwrap();

        assert_eq!(viewport.center(), Complex::new(-0.5, 0.25));
        assert_eq!(viewport.span(), 4.0);
    }

    #[test]
    fn test_viewport_span_must_be_positive() {
        assert_eq!(
            Viewport::new(Complex::ZERO, 0.0),
            Err(ViewportError::InvalidSpan { span: 0.0 })
        );
        assert_eq!(
            Viewport::new(Complex::ZERO, -1.0),
            Err(ViewportError::InvalidSpan { span: -1.0 })
        );
        assert!(Viewport::new(Complex::ZERO, f64::INFINITY).is_err());
        assert!(Viewport::new(Complex::ZERO, f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_center_must_be_finite() {
        let center = Complex::new(f64::NAN, 0.0);

        assert!(matches!(
            Viewport::new(center, 1.0),
            Err(ViewportError::InvalidCenter { .. })
        ));
    }

    #[test]
    fn test_corners_of_default_view() {
        let viewport = Viewport::new(Complex::ZERO, 4.0).unwrap();

        assert_eq!(viewport.top_left(), Complex::new(-2.0, 2.0));
        assert_eq!(viewport.bottom_right(), Complex::new(2.0, -2.0));
    }

    #[test]
    fn test_corners_follow_center() {
        let viewport = Viewport::new(Complex::new(1.0, -1.0), 2.0).unwrap();

        assert_eq!(viewport.top_left(), Complex::new(0.0, 0.0));
        assert_eq!(viewport.bottom_right(), Complex::new(2.0, -2.0));
    }
}
