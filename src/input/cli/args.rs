use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::core::actions::render_mandelbrot::render_mandelbrot::SweepStrategy;
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;
use clap::Parser;
use std::error::Error;
use std::fmt;

const DEFAULT_PREVIEW_COLUMNS: u16 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Resolution(ResolutionError),
    IterationCeiling(MandelbrotError),
    EmptyAffirmative,
    ZeroPreviewColumns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(err) => write!(f, "invalid --resolution: {}", err),
            Self::IterationCeiling(err) => write!(f, "invalid --max-iterations: {}", err),
            Self::EmptyAffirmative => write!(f, "--affirmative must not be blank"),
            Self::ZeroPreviewColumns => write!(f, "--preview-columns must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolution(err) => Some(err),
            Self::IterationCeiling(err) => Some(err),
            Self::EmptyAffirmative | Self::ZeroPreviewColumns => None,
        }
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<MandelbrotError> for ConfigError {
    fn from(err: MandelbrotError) -> Self {
        Self::IterationCeiling(err)
    }
}

/// Interactive Mandelbrot explorer: enter a center and a zoom level, see the set.
#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer", version)]
pub struct CliArgs {
    /// Side of the square frame, in pixels
    #[arg(short, long, default_value_t = Resolution::DEFAULT.get())]
    pub resolution: u32,

    /// Spread each render over all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Deepest iteration count a zoom may reach
    #[arg(short, long, default_value_t = MaxIterations::DEFAULT_CEILING.get())]
    pub max_iterations: u32,

    /// Answer that keeps the session going after each frame
    #[arg(short, long, default_value = "y")]
    pub affirmative: String,

    /// Width of the character preview printed to the terminal
    #[arg(long, default_value_t = DEFAULT_PREVIEW_COLUMNS)]
    pub preview_columns: u16,
}

impl CliArgs {
    pub fn explorer_config(&self) -> Result<ExplorerConfig, ConfigError> {
        let affirmative_token = self.affirmative.trim();
        if affirmative_token.is_empty() {
            return Err(ConfigError::EmptyAffirmative);
        }

        let sweep = if self.parallel {
            SweepStrategy::Parallel
        } else {
            SweepStrategy::Sequential
        };

        Ok(ExplorerConfig {
            resolution: Resolution::new(self.resolution)?,
            max_iterations_ceiling: MaxIterations::new(self.max_iterations)?,
            affirmative_token: affirmative_token.to_string(),
            sweep,
            ..ExplorerConfig::default()
        })
    }

    pub fn preview_columns(&self) -> Result<usize, ConfigError> {
        match self.preview_columns {
            0 => Err(ConfigError::ZeroPreviewColumns),
            columns => Ok(usize::from(columns)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("mandelbrot_explorer").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_match_explorer_defaults() {
        let args = parse(&[]);

        assert_eq!(args.explorer_config().unwrap(), ExplorerConfig::default());
        assert_eq!(args.preview_columns().unwrap(), 64);
    }

    #[test]
    fn test_flags_are_applied() {
        let args = parse(&["--resolution", "256", "--parallel", "--affirmative", "s"]);
        let config = args.explorer_config().unwrap();

        assert_eq!(config.resolution.get(), 256);
        assert_eq!(config.sweep, SweepStrategy::Parallel);
        assert_eq!(config.affirmative_token, "s");
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let args = parse(&["-r", "0"]);

        assert_eq!(
            args.explorer_config(),
            Err(ConfigError::Resolution(ResolutionError::Zero))
        );
    }

    #[test]
    fn test_iteration_ceiling_flag() {
        let config = parse(&["--max-iterations", "500"]).explorer_config().unwrap();

        assert_eq!(config.max_iterations_ceiling.get(), 500);
        assert_eq!(
            parse(&["-m", "0"]).explorer_config(),
            Err(ConfigError::IterationCeiling(MandelbrotError::ZeroMaxIterations))
        );
    }

    #[test]
    fn test_blank_affirmative_is_rejected() {
        let args = parse(&["--affirmative", "  "]);

        assert_eq!(args.explorer_config(), Err(ConfigError::EmptyAffirmative));
    }

    #[test]
    fn test_zero_preview_columns_is_rejected() {
        let args = parse(&["--preview-columns", "0"]);

        assert_eq!(args.preview_columns(), Err(ConfigError::ZeroPreviewColumns));
    }

    #[test]
    fn test_malformed_resolution_fails_to_parse() {
        let result = CliArgs::try_parse_from(["mandelbrot_explorer", "--resolution", "big"]);

        assert!(result.is_err());
    }
}
