use clap::Parser;
use mandelbrot_explorer::{CliArgs, RunGuiCommand};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let command = RunGuiCommand::new(args.explorer_config()?);

    command.execute()
}
