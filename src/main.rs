use clap::Parser;
use mandelbrot_explorer::{CliArgs, ConsoleInputSource, InteractiveController, TerminalPresenter};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let config = args.explorer_config()?;

    log::info!(
        "Starting explorer at {} with {} sweep",
        config.resolution,
        config.sweep.display_name()
    );

    let input = ConsoleInputSource::new(
        io::stdin().lock(),
        io::stdout(),
        config.affirmative_token.clone(),
    );
    let display = TerminalPresenter::new(io::stdout(), args.preview_columns()?);

    let mut controller = InteractiveController::new(input, display, config)?;
    controller.run()?;

    Ok(())
}
