//! StoryNest CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use storynest::cli::{Cli, CommandContext, CommandDispatcher};
use storynest::config::{default_data_dir, load_settings};
use storynest::ui::{should_use_colors, OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("storynest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storynest=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("StoryNest starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = TerminalUI::with_colors(output_mode, !cli.no_color && should_use_colors());

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let settings = match load_settings(&data_dir, cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(CommandContext::new(data_dir, settings));

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
