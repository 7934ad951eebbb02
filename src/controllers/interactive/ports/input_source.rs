use crate::controllers::interactive::data::view_input::ViewInput;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read input: {}", err),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Synchronous source of user decisions. Each call blocks until a value is available.
///
/// Values handed out are already validated: the zoom level is finite and positive.
/// `Ok(None)` means the input is closed and no more values will arrive.
pub trait InputSource {
    fn read_view(&mut self) -> Result<Option<ViewInput>, InputError>;

    /// Free-text answer to "continue?", read after each frame is shown.
    fn read_continue(&mut self) -> Result<Option<String>, InputError>;
}
