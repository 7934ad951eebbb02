use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::resolution::Resolution;

/// Colours a row-major grid of values into a pixel buffer.
///
/// Fails with [`PixelBufferError::SizeMismatch`] when `input` does not hold exactly one value
/// per pixel of `resolution`.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    resolution: Resolution,
) -> Result<PixelBuffer, PixelBufferError> {
    let colours = input.into_iter().map(|value| mapper.map(value)).collect();

    PixelBuffer::from_colours(resolution, colours)
}
