//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::session::OnboardingSession;
use crate::state::{Clock, FileRecordStore};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The exit code as a process status byte.
    ///
    /// Codes outside `0..=255` collapse to a generic failure.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Where commands find the record and how they persist it.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub data_dir: PathBuf,
    pub settings: Settings,
}

impl CommandContext {
    /// Create a context for a data directory.
    pub fn new(data_dir: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            data_dir: data_dir.into(),
            settings,
        }
    }

    /// The record store inside the data directory.
    pub fn store(&self) -> FileRecordStore {
        FileRecordStore::in_dir(&self.data_dir)
    }

    /// Start a session over the on-disk record.
    pub fn open_session(&self) -> OnboardingSession<FileRecordStore> {
        OnboardingSession::start(self.store(), &self.settings, Clock::System)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.context.data_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Resume(args)) => {
                super::resume::ResumeCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Steps(args)) => super::steps::StepsCommand::new(args.clone()).execute(ui),
            Some(Commands::Set(args)) => super::set::SetCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Skip(args)) => {
                super::skip::SkipCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Reset) => super::reset::ResetCommand::new(ctx).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::status::StatusCommand::new(ctx, Default::default()).execute(ui),
        }
    }
}
