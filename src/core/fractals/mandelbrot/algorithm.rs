use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z = z² + c` steps, starting from `z = 0`, before `|z|² > 4`.
///
/// Returns the zero-based step index at which the orbit first leaves the radius-2 disc, or
/// `max_iterations` when it is still inside after the last step.
#[must_use]
pub fn escape_iteration(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    resolution: Resolution,
    max_iterations: MaxIterations,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, resolution: Resolution, max_iterations: MaxIterations) -> Self {
        Self {
            viewport,
            resolution,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn resolution(&self) -> Resolution {
        self.resolution
    }

    fn compute(&self, pixel: Point) -> u32 {
        let c = pixel_to_complex_coords(pixel, self.resolution, self.viewport);
        escape_iteration(c, self.max_iterations.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(side: u32, max_iterations: u32) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(
            Viewport::new(Complex::ZERO, 4.0).unwrap(),
            Resolution::new(side).unwrap(),
            MaxIterations::new(max_iterations).unwrap(),
        )
    }

    #[test]
    fn test_origin_never_escapes() {
        for max in [1, 50, 1000] {
            assert_eq!(escape_iteration(Complex::ZERO, max), max);
        }
    }

    #[test]
    fn test_far_point_escapes_on_first_step() {
        // z1 = 3 + 3i, |z1|² = 18
        assert_eq!(escape_iteration(Complex::new(3.0, 3.0), 50), 0);
    }

    #[test]
    fn test_point_on_radius_does_not_escape_immediately() {
        // c = -2 orbits 0 -> -2 -> 2 -> 2 ... and |z|² == 4 is not an escape
        assert_eq!(escape_iteration(Complex::new(-2.0, 0.0), 100), 100);
    }

    #[test]
    fn test_known_escape_counts() {
        // c = 1: z = 1, 2, 5 -> escapes at step 2
        assert_eq!(escape_iteration(Complex::new(1.0, 0.0), 50), 2);
        // c = 1 - i: z = 1 - i, 1 - 3i -> escapes at step 1
        assert_eq!(escape_iteration(Complex::new(1.0, -1.0), 50), 1);
    }

    #[test]
    fn test_periodic_orbit_is_bounded() {
        // c = i cycles between -1 + i and -i
        assert_eq!(escape_iteration(Complex::new(0.0, 1.0), 500), 500);
    }

    #[test]
    fn test_result_never_exceeds_cap() {
        let algorithm = algorithm(32, 17);

        for y in 0..32 {
            for x in 0..32 {
                assert!(algorithm.compute(Point { x, y }) <= 17);
            }
        }
    }

    #[test]
    fn test_compute_maps_pixel_through_viewport() {
        let algorithm = algorithm(4, 50);

        // (2, 2) is the origin, (0, 0) is -2 + 2i
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), 50);
        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), 0);
    }

    #[test]
    fn test_resolution_is_passed_through() {
        assert_eq!(algorithm(8, 12).resolution().get(), 8);
    }
}
