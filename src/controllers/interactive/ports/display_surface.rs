use crate::controllers::interactive::data::frame_data::FrameData;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DisplayError {
    Io(io::Error),
    Closed,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to present frame: {}", err),
            Self::Closed => write!(f, "display surface has been closed"),
        }
    }
}

impl Error for DisplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Closed => None,
        }
    }
}

impl From<io::Error> for DisplayError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Where finished frames go. A new frame replaces whatever was shown before.
pub trait DisplaySurface {
    fn present(&mut self, frame: FrameData) -> Result<(), DisplayError>;

    /// Overlay text drawn near the bottom-right of the current frame.
    fn show_status(&mut self, message: &str) -> Result<(), DisplayError>;
}
