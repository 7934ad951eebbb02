pub mod algorithm;
pub mod errors;
pub mod max_iterations;
pub mod palette;
