//! Skip command implementation.
//!
//! The `storynest skip <STEP>` command does what a branching quiz screen
//! does when it routes past a step: it fills the step's unanswered fields
//! with placeholders so resume never lands there.

use crate::cli::args::SkipArgs;
use crate::error::{Result, StorynestError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The skip command implementation.
pub struct SkipCommand {
    context: CommandContext,
    args: SkipArgs,
}

impl SkipCommand {
    /// Create a new skip command.
    pub fn new(context: CommandContext, args: SkipArgs) -> Self {
        Self { context, args }
    }
}

impl Command for SkipCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = self.context.open_session();

        match session.mark_skipped(&self.args.step) {
            Ok(()) => {}
            Err(e @ StorynestError::UnknownStep { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        }

        let target = session.resume_target();
        if let Err(e) = session.finish() {
            ui.warning(&format!("Skip of {} was not saved: {}", self.args.step, e));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!("Skipped {}", self.args.step));
        ui.message(&format!("Next: {}", target));
        Ok(CommandResult::success())
    }
}
