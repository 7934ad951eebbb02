use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;

/// Maps a pixel to the complex point it samples.
///
/// Pixel `(0, 0)` lands on the top-left corner of the viewport. Rows grow downward while the
/// imaginary axis grows upward, so the row term is subtracted.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, resolution: Resolution, viewport: Viewport) -> Complex {
    debug_assert!(resolution.contains_point(pixel));

    let span = viewport.span();
    let side = f64::from(resolution.get());
    let center = viewport.center();

    let real = (f64::from(pixel.x) * span) / side - span / 2.0 + center.real;
    let imag = center.imag + span / 2.0 - (f64::from(pixel.y) * span) / side;

    Complex { real, imag }
}
