use crate::controllers::interactive::data::view_input::ViewInput;
use crate::controllers::interactive::ports::input_source::{InputError, InputSource};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Reads views as whitespace-separated tokens and continue answers as whole lines.
///
/// The three view values may share a line; a prompt is only printed when no token is already
/// buffered. Bad values are reported on the prompt stream, the rest of their line is
/// discarded, and the same value is asked for again. Anything left on the line after the zoom
/// level is dropped, so the continue answer always comes from a fresh line and a blank line
/// is a valid (negative) answer.
pub struct ConsoleInputSource<R: BufRead, W: Write> {
    reader: R,
    prompts: W,
    affirmative_token: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> ConsoleInputSource<R, W> {
    pub fn new(reader: R, prompts: W, affirmative_token: impl Into<String>) -> Self {
        Self {
            reader,
            prompts,
            affirmative_token: affirmative_token.into(),
            tokens: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn prompts(&self) -> &W {
        &self.prompts
    }

    fn next_token(&mut self, prompt: &str) -> Result<Option<String>, InputError> {
        if self.tokens.is_empty() {
            write!(self.prompts, "{}", prompt)?;
            self.prompts.flush()?;
        }

        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.tokens.pop_front())
    }

    fn read_number(
        &mut self,
        prompt: &str,
        accept: fn(f64) -> bool,
        complaint: &str,
    ) -> Result<Option<f64>, InputError> {
        loop {
            let Some(token) = self.next_token(prompt)? else {
                return Ok(None);
            };

            match token.parse::<f64>() {
                Ok(value) if accept(value) => return Ok(Some(value)),
                _ => {
                    log::warn!("Rejected input {:?}", token);
                    self.tokens.clear();
                    writeln!(self.prompts, "{:?} {}, try again.", token, complaint)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInputSource<R, W> {
    fn read_view(&mut self) -> Result<Option<ViewInput>, InputError> {
        let Some(center_x) = self.read_number("Center x: ", f64::is_finite, "is not a number")?
        else {
            return Ok(None);
        };
        let Some(center_y) = self.read_number("Center y: ", f64::is_finite, "is not a number")?
        else {
            return Ok(None);
        };
        let Some(zoom) = self.read_number(
            "Zoom: ",
            |zoom| zoom.is_finite() && zoom > 0.0,
            "is not a positive zoom level",
        )?
        else {
            return Ok(None);
        };

        self.tokens.clear();

        Ok(Some(ViewInput {
            center_x,
            center_y,
            zoom,
        }))
    }

    fn read_continue(&mut self) -> Result<Option<String>, InputError> {
        self.tokens.clear();
        write!(self.prompts, "Continue? ({} to zoom again): ", self.affirmative_token)?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}
