//! Command-line interface for StoryNest onboarding.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ResumeArgs, SetArgs, SkipArgs, StatusArgs, StepsArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
