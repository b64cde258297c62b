//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// StoryNest onboarding - inspect and drive quiz progress.
#[derive(Debug, Parser)]
#[command(name = "storynest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the onboarding record and config.yml
    #[arg(short, long, global = true, env = "STORYNEST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to settings file (overrides <data-dir>/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show onboarding progress (default if no command specified)
    Status(StatusArgs),

    /// Show where a returning user should land
    Resume(ResumeArgs),

    /// List onboarding steps in screen order
    Steps(StepsArgs),

    /// Record an answer
    Set(SetArgs),

    /// Mark a step as skipped by a branching screen
    Skip(SkipArgs),

    /// Clear all onboarding answers
    Reset,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `resume` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResumeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `steps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StepsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SetArgs {
    /// Record field (JSON key, e.g. childName)
    pub field: String,

    /// Answer; list fields take comma-separated values
    pub value: String,
}

/// Arguments for the `skip` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SkipArgs {
    /// Step identifier (e.g. aggression-frequency)
    pub step: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
