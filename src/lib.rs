//! Escape-time Mandelbrot renderer with an interactive recenter-and-zoom loop.

#[cfg(feature = "gui")]
pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::interactive::{
    ControllerError, DisplaySurface, ExplorerConfig, FrameData, InputSource,
    InteractiveController, SessionSummary, ViewInput,
};
pub use crate::core::actions::render_mandelbrot::render_mandelbrot::{
    RenderError, SweepStrategy, render_mandelbrot,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::resolution::Resolution;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
pub use crate::core::fractals::mandelbrot::palette::Palette;
pub use input::cli::args::{CliArgs, ConfigError};
pub use input::console::console_input::ConsoleInputSource;
pub use presenters::terminal::presenter::TerminalPresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
