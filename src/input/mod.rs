//! Input adapters for the explorer.
//!
//! These receive input from the command line, the console or a window and translate it into
//! what the controller asks for.

pub mod cli;
pub mod console;
#[cfg(feature = "gui")]
pub mod gui;
