//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Copies colours into an RGBA byte buffer, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_colours_to_rgba(src: &[Colour], dst: &mut [u8]) {
    let expected_dst_len = src.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (colour, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel.copy_from_slice(&colour.to_rgba());
    }
}

/// Fills an RGBA buffer with one opaque colour.
pub fn fill_rgba(dst: &mut [u8], colour: Colour) {
    let rgba = colour.to_rgba();

    for dst_pixel in dst.chunks_exact_mut(4) {
        dst_pixel.copy_from_slice(&rgba);
    }
}
