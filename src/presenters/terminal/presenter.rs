use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::display_surface::{DisplayError, DisplaySurface};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use std::io::Write;

/// Darkest to brightest.
const LUMINANCE_RAMP: &[u8] = b" .:-=+*#%@";

/// Prints each frame as a downsampled block of characters.
///
/// Terminal cells are roughly twice as tall as they are wide, so the preview has half as many
/// rows as columns. Status lines are right-aligned under the preview.
pub struct TerminalPresenter<W: Write> {
    out: W,
    columns: usize,
    last_width: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, columns: usize) -> Self {
        let columns = columns.max(1);

        Self {
            out,
            columns,
            last_width: columns,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Samples the buffer on a `columns x ceil(columns / 2)` grid, nearest pixel.
#[must_use]
pub fn ascii_preview(buffer: &PixelBuffer, columns: usize) -> Vec<String> {
    let side = buffer.resolution().get() as usize;
    let columns = columns.clamp(1, side);
    let rows = columns.div_ceil(2);

    (0..rows)
        .map(|row| {
            let y = (row * side / rows) as u32;
            (0..columns)
                .map(|column| {
                    let x = (column * side / columns) as u32;
                    let luminance = buffer
                        .pixel(Point { x, y })
                        .map_or(0.0, |colour| colour.luminance());
                    let step = (luminance * (LUMINANCE_RAMP.len() - 1) as f64).round() as usize;
                    char::from(LUMINANCE_RAMP[step.min(LUMINANCE_RAMP.len() - 1)])
                })
                .collect()
        })
        .collect()
}

impl<W: Write> DisplaySurface for TerminalPresenter<W> {
    fn present(&mut self, frame: FrameData) -> Result<(), DisplayError> {
        let lines = ascii_preview(&frame.pixel_buffer, self.columns);
        self.last_width = lines.first().map_or(self.columns, String::len);

        let top_left = frame.viewport.top_left();
        let bottom_right = frame.viewport.bottom_right();

        writeln!(
            self.out,
            "Frame {}: real [{}, {}] imag [{}, {}] at {} iterations",
            frame.generation,
            top_left.real,
            bottom_right.real,
            bottom_right.imag,
            top_left.imag,
            frame.max_iterations
        )?;
        for line in &lines {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;

        Ok(())
    }

    fn show_status(&mut self, message: &str) -> Result<(), DisplayError> {
        writeln!(self.out, "{:>width$}", message, width = self.last_width)?;
        self.out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::resolution::Resolution;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
    use std::time::Duration;

    fn frame(pixel_buffer: PixelBuffer) -> FrameData {
        FrameData {
            generation: 3,
            pixel_buffer,
            render_duration: Duration::from_millis(7),
            viewport: Viewport::new(Complex::ZERO, 4.0).unwrap(),
            max_iterations: MaxIterations::INITIAL,
        }
    }

    #[test]
    fn test_preview_has_half_as_many_rows_as_columns() {
        let buffer = PixelBuffer::new(Resolution::new(64).unwrap());

        let lines = ascii_preview(&buffer, 16);

        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| line.len() == 16));
    }

    #[test]
    fn test_preview_is_clamped_to_resolution() {
        let buffer = PixelBuffer::new(Resolution::new(4).unwrap());

        let lines = ascii_preview(&buffer, 80);

        assert_eq!(lines, vec!["    ", "    "]);
    }

    #[test]
    fn test_brighter_pixels_use_denser_characters() {
        let white = Colour::rgb(255, 255, 255);
        let colours = vec![Colour::BLACK, white, Colour::BLACK, Colour::BLACK];
        let buffer = PixelBuffer::from_colours(Resolution::new(2).unwrap(), colours).unwrap();

        let lines = ascii_preview(&buffer, 2);

        assert_eq!(lines, vec![" @"]);
    }

    #[test]
    fn test_present_writes_header_and_preview() {
        let mut presenter = TerminalPresenter::new(Vec::new(), 4);

        presenter.present(frame(PixelBuffer::new(Resolution::new(8).unwrap()))).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Frame 3: real [-2, 2] imag [-2, 2] at 50 iterations");
        assert_eq!(&lines[1..], &["    ", "    "]);
    }

    #[test]
    fn test_status_is_right_aligned_under_preview() {
        let mut presenter = TerminalPresenter::new(Vec::new(), 20);

        presenter.present(frame(PixelBuffer::new(Resolution::new(32).unwrap()))).unwrap();
        presenter.show_status("done in 7ms.").unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        let status = text.lines().last().unwrap();
        assert_eq!(status, "        done in 7ms.");
    }

    #[test]
    fn test_zero_columns_still_draws_one() {
        let mut presenter = TerminalPresenter::new(Vec::new(), 0);

        presenter.present(frame(PixelBuffer::new(Resolution::new(2).unwrap()))).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text.lines().nth(1), Some(" "));
    }
}
