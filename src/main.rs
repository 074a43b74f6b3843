mod catalog;
mod chat;
mod cli;
mod config;
mod error;
mod extract;
mod rank;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use error::{ExitStatus, SymcheckError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose, cli.quiet, cli.log_format.as_deref());
    ui::set_quiet_mode(cli.quiet);

    match run_command(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            ui::print_error(&e.to_string());
            e.exit_status().into()
        }
    }
}

fn run_command(cli: Cli) -> Result<ExitStatus, SymcheckError> {
    let config = config::load(cli.config.as_deref())?;
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref(), &config);

    match cli.command {
        // The conversation is the default action.
        Some(Commands::Chat) | None => {
            cli::run_chat(&data_dir, &config)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Diagnose { text, json }) => {
            cli::run_diagnose(&data_dir, &config, &text, json)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Symptoms { json }) => {
            cli::run_symptoms(&data_dir, json)?;
            Ok(ExitStatus::Success)
        }

        Some(Commands::Data { command }) => {
            cli::run_data(&command, &data_dir)?;
            Ok(ExitStatus::Success)
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, format: Option<&str>) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        Some("json") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().without_time().with_target(false))
                .init();
        }
    }
}
