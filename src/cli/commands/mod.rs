//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`].
//!
//! Exit codes: `0` success, `1` unexpected error or a write that did not
//! reach disk, `2` bad user input (unknown field, unknown step, blank or
//! unparsable value).

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod reset;
pub mod resume;
pub mod set;
pub mod skip;
pub mod status;
pub mod steps;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
