//! Session state for the interactive controller.
//!
//! The only thing carried between iterations is a [`ViewState`], rebuilt wholesale from each
//! round of user input.

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::view_input::ViewInput;
use crate::controllers::interactive::errors::ControllerError;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;

/// Where to look and how hard to look there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub viewport: Viewport,
    pub max_iterations: MaxIterations,
}

impl ViewState {
    /// Centered on the origin at zoom level 1 with the configured starting depth.
    pub fn initial(config: &ExplorerConfig) -> Result<Self, ControllerError> {
        Ok(Self {
            viewport: Viewport::new(Complex::ZERO, config.initial_span)?,
            max_iterations: config.initial_max_iterations,
        })
    }

    pub fn from_input(input: ViewInput, config: &ExplorerConfig) -> Result<Self, ControllerError> {
        let span = span_for_zoom(config.initial_span, input.zoom);
        let viewport = Viewport::new(Complex::new(input.center_x, input.center_y), span)?;
        let max_iterations = max_iterations_for_span(span, config)?;

        Ok(Self {
            viewport,
            max_iterations,
        })
    }
}

/// Zooming in by `zoom` shrinks the visible window by the same factor.
#[must_use]
pub fn span_for_zoom(initial_span: f64, zoom: f64) -> f64 {
    initial_span / zoom
}

/// `floor(base + gain / span)`, clamped to `1..=max_iterations_ceiling`.
pub fn max_iterations_for_span(
    span: f64,
    config: &ExplorerConfig,
) -> Result<MaxIterations, ControllerError> {
    let depth = (config.iteration_base + config.iteration_gain / span).floor();
    let ceiling = config.max_iterations_ceiling.get();

    // float-to-int casts saturate, so huge depths land on the ceiling
    Ok(MaxIterations::new((depth as u32).clamp(1, ceiling))?)
}

/// Case-insensitive match of a continue answer against the affirmative token.
#[must_use]
pub fn is_affirmative(answer: &str, affirmative_token: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(affirmative_token.trim())
}

#[derive(Debug)]
pub enum ControllerState {
    /// Waiting on the input source for the next center and zoom.
    AwaitingInput,
    Rendering(ViewState),
    /// Frame is done and about to replace whatever the display shows.
    Presenting(FrameData),
    Terminated,
}

impl ControllerState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AwaitingInput => "awaiting input",
            Self::Rendering(_) => "rendering",
            Self::Presenting(_) => "presenting",
            Self::Terminated => "terminated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::ViewportError;

    fn input(center_x: f64, center_y: f64, zoom: f64) -> ViewInput {
        ViewInput {
            center_x,
            center_y,
            zoom,
        }
    }

    #[test]
    fn test_initial_view() {
        let view = ViewState::initial(&ExplorerConfig::default()).unwrap();

        assert_eq!(view.viewport.center(), Complex::ZERO);
        assert_eq!(view.viewport.span(), 4.0);
        assert_eq!(view.max_iterations.get(), 50);
    }

    #[test]
    fn test_zoom_two_halves_the_span() {
        let view = ViewState::from_input(input(0.0, 0.0, 2.0), &ExplorerConfig::default()).unwrap();

        assert_eq!(view.viewport.span(), 2.0);
        assert_eq!(view.viewport.top_left(), Complex::new(-1.0, 1.0));
    }

    #[test]
    fn test_iterations_follow_heuristic() {
        let config = ExplorerConfig::default();

        // 50 + 10 / 4
        assert_eq!(max_iterations_for_span(4.0, &config).unwrap().get(), 52);
        // 50 + 10 / 0.125
        assert_eq!(max_iterations_for_span(0.125, &config).unwrap().get(), 130);
    }

    #[test]
    fn test_deeper_zoom_shrinks_span_and_never_lowers_iterations() {
        let config = ExplorerConfig::default();
        let zooms = [0.25, 0.5, 1.0, 1.5, 2.0, 10.0, 1_000.0, 1.0e6];

        let views: Vec<ViewState> = zooms
            .iter()
            .map(|&zoom| ViewState::from_input(input(-0.5, 0.0, zoom), &config).unwrap())
            .collect();

        for pair in views.windows(2) {
            assert!(pair[1].viewport.span() < pair[0].viewport.span());
            assert!(pair[1].max_iterations >= pair[0].max_iterations);
        }
    }

    #[test]
    fn test_center_comes_from_input() {
        let view =
            ViewState::from_input(input(-0.75, 0.1, 8.0), &ExplorerConfig::default()).unwrap();

        assert_eq!(view.viewport.center(), Complex::new(-0.75, 0.1));
    }

    #[test]
    fn test_zero_zoom_is_an_invalid_view() {
        let result = ViewState::from_input(input(0.0, 0.0, 0.0), &ExplorerConfig::default());

        assert!(matches!(
            result,
            Err(ControllerError::View(ViewportError::InvalidSpan { .. }))
        ));
    }

    #[test]
    fn test_iterations_never_drop_below_one() {
        let config = ExplorerConfig {
            iteration_base: 0.0,
            iteration_gain: 0.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(max_iterations_for_span(4.0, &config).unwrap().get(), 1);
    }

    #[test]
    fn test_extreme_zoom_is_held_at_ceiling() {
        let config = ExplorerConfig::default();

        let view = ViewState::from_input(input(-0.75, 0.1, 1.0e10), &config).unwrap();

        assert_eq!(view.max_iterations, config.max_iterations_ceiling);
        assert_eq!(
            max_iterations_for_span(f64::MIN_POSITIVE, &config).unwrap(),
            config.max_iterations_ceiling
        );
    }

    #[test]
    fn test_custom_ceiling_applies() {
        let config = ExplorerConfig {
            max_iterations_ceiling: MaxIterations::new(60).unwrap(),
            ..ExplorerConfig::default()
        };

        // 50 + 10 / 0.5 = 70, held at 60
        assert_eq!(max_iterations_for_span(0.5, &config).unwrap().get(), 60);
        assert_eq!(max_iterations_for_span(4.0, &config).unwrap().get(), 52);
    }

    #[test]
    fn test_is_affirmative_ignores_case_and_whitespace() {
        assert!(is_affirmative("y", "y"));
        assert!(is_affirmative("  Y \n", "y"));
        assert!(is_affirmative("S", "s"));
        assert!(!is_affirmative("n", "y"));
        assert!(!is_affirmative("yes", "y"));
        assert!(!is_affirmative("", "y"));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(ControllerState::AwaitingInput.name(), "awaiting input");
        assert_eq!(ControllerState::Terminated.name(), "terminated");
    }
}
