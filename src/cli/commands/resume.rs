//! Resume command implementation.
//!
//! The `storynest resume` command prints the landing screen for a returning
//! user: `entry`, `step <path>` or `main-app`.

use crate::cli::args::ResumeArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The resume command implementation.
pub struct ResumeCommand {
    context: CommandContext,
    args: ResumeArgs,
}

impl ResumeCommand {
    /// Create a new resume command.
    pub fn new(context: CommandContext, args: ResumeArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ResumeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.context.open_session().resume_target();

        if self.args.json {
            let json = serde_json::to_string(&target).map_err(anyhow::Error::from)?;
            ui.data(&json);
        } else {
            ui.data(&target.to_string());
        }

        Ok(CommandResult::success())
    }
}
