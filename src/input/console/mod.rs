//! Line-oriented console input.

pub mod console_input;
