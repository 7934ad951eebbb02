//! Windowed display for the interactive explorer.
//!
//! The window shows the latest frame at one framebuffer pixel per screen pixel, drawn with
//! `pixels`, and overlays the status line in the bottom-right corner through egui. User input
//! still comes from the console; the controller runs on its own thread so the event loop stays
//! responsive while it blocks on stdin.

pub mod app;
pub mod commands;
pub mod events;
