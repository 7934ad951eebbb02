use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel computation swept over a square grid.
pub trait FractalAlgorithm {
    type Output;

    fn resolution(&self) -> Resolution;

    fn compute(&self, pixel: Point) -> Self::Output;
}
