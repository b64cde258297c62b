//! Reset command implementation.
//!
//! The `storynest reset` command wipes all onboarding answers.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    context: CommandContext,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.context.open_session();
        if let Err(e) = session.reset() {
            ui.warning(&format!("Saved answers could not be removed: {}", e));
            return Ok(CommandResult::failure(1));
        }
        ui.success("Onboarding reset");
        Ok(CommandResult::success())
    }
}
