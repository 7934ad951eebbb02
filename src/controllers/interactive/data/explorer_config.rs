use crate::core::actions::render_mandelbrot::render_mandelbrot::SweepStrategy;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;

const DEFAULT_INITIAL_SPAN: f64 = 4.0;
const DEFAULT_ITERATION_BASE: f64 = 50.0;
const DEFAULT_ITERATION_GAIN: f64 = 10.0;
const DEFAULT_AFFIRMATIVE_TOKEN: &str = "y";

/// Session settings for the interactive explorer.
///
/// The iteration heuristic is `floor(iteration_base + iteration_gain / span)`; the constants
/// are tunable, only "deeper zoom gives more iterations" matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Side of the square frame in pixels.
    pub resolution: Resolution,
    /// Width of the complex-plane window at zoom level 1.
    pub initial_span: f64,
    /// Depth of the first frame, before any user input.
    pub initial_max_iterations: MaxIterations,
    /// Deepest iteration count any zoom may reach.
    pub max_iterations_ceiling: MaxIterations,
    pub iteration_base: f64,
    pub iteration_gain: f64,
    /// Continue token; anything else ends the session. Compared case-insensitively.
    pub affirmative_token: String,
    pub sweep: SweepStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::DEFAULT,
            initial_span: DEFAULT_INITIAL_SPAN,
            initial_max_iterations: MaxIterations::INITIAL,
            max_iterations_ceiling: MaxIterations::DEFAULT_CEILING,
            iteration_base: DEFAULT_ITERATION_BASE,
            iteration_gain: DEFAULT_ITERATION_GAIN,
            affirmative_token: DEFAULT_AFFIRMATIVE_TOKEN.to_string(),
            sweep: SweepStrategy::default(),
        }
    }
}
