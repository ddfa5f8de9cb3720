//! `parcelsort` command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use parcelsort::cli::{self, CliError, DEFAULT_CONFIG};
use parcelsort::TracingObserver;

#[derive(Debug, Parser)]
#[command(name = "parcelsort", version, about = "Classify packages for automated sorting")]
struct Cli {
    /// Suppress the startup banner.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (TOML, or YAML by extension).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one package from width, height, length (cm) and mass (kg).
    #[command(allow_negative_numbers = true)]
    Classify {
        width: String,
        height: String,
        length: String,
        mass: String,

        /// Apply the form pre-check (all values above zero) and lenient parsing.
        #[arg(long)]
        strict: bool,
    },
    /// Classify every sample in the configured catalog.
    Samples,
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<(), CliError> {
    let config = cli::load_config(args.config.as_deref(), DEFAULT_CONFIG)?;

    #[cfg(feature = "console")]
    {
        let mut console = config.console.clone();
        console.banner &= !args.quiet;
        parcelsort::console::init_with(&console);
    }

    match args.command {
        Command::Classify {
            width,
            height,
            length,
            mass,
            strict,
        } => {
            let values = [width.as_str(), height.as_str(), length.as_str(), mass.as_str()];
            let category = cli::classify_args(values, strict, &TracingObserver)?;
            println!("{}", category);
        }
        Command::Samples => {
            let report = cli::run_samples(&config, &TracingObserver);
            for line in &report.lines {
                println!("{}", line);
            }
            report.into_result()?;
        }
    }
    Ok(())
}
