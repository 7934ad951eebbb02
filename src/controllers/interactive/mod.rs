//! Interactive controller for exploring the Mandelbrot set one view at a time.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: [`InputSource`] supplies a center, a zoom level and "continue?" answers
//! - **Output**: [`DisplaySurface`] receives each finished frame and its status line
//! - **Core**: rendering is delegated to the actions in `core/`
//!
//! The session is a small state machine (see [`ControllerState`]) driven synchronously on the
//! caller's thread.

mod controller;
pub mod data;
pub mod errors;
pub mod ports;
pub mod state;

pub use controller::{InteractiveController, SessionSummary};
pub use data::explorer_config::ExplorerConfig;
pub use data::frame_data::FrameData;
pub use data::view_input::ViewInput;
pub use errors::ControllerError;
pub use ports::display_surface::{DisplayError, DisplaySurface};
pub use ports::input_source::{InputError, InputSource};
pub use state::{ControllerState, ViewState};
