use crate::controllers::interactive::ports::display_surface::DisplayError;
use crate::controllers::interactive::ports::input_source::InputError;
use crate::core::actions::render_mandelbrot::render_mandelbrot::RenderError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ControllerError {
    View(ViewportError),
    Iterations(MandelbrotError),
    Render(RenderError),
    Input(InputError),
    Display(DisplayError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "invalid view: {}", err),
            Self::Iterations(err) => write!(f, "invalid iteration depth: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Input(err) => write!(f, "{}", err),
            Self::Display(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Iterations(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Input(err) => Some(err),
            Self::Display(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ControllerError {
    fn from(err: ViewportError) -> Self {
        Self::View(err)
    }
}

impl From<MandelbrotError> for ControllerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Iterations(err)
    }
}

impl From<RenderError> for ControllerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<InputError> for ControllerError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<DisplayError> for ControllerError {
    fn from(err: DisplayError) -> Self {
        Self::Display(err)
    }
}
