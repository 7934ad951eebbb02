//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (display surfaces, input sources).

pub mod display_surface;
pub mod input_source;
