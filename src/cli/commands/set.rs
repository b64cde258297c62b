//! Set command implementation.
//!
//! The `storynest set <FIELD> <VALUE>` command records one answer and saves
//! the record.

use crate::cli::args::SetArgs;
use crate::error::{Result, StorynestError};
use crate::onboarding::Field;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The set command implementation.
pub struct SetCommand {
    context: CommandContext,
    args: SetArgs,
}

impl SetCommand {
    /// Create a new set command.
    pub fn new(context: CommandContext, args: SetArgs) -> Self {
        Self { context, args }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let parsed = self
            .args
            .field
            .parse::<Field>()
            .and_then(|field| Ok((field, field.parse_value(&self.args.value)?)));

        let (field, value) = match parsed {
            Ok(pair) => pair,
            Err(e @ StorynestError::UnknownField { .. })
            | Err(e @ StorynestError::InvalidValue { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut session = self.context.open_session();
        session.set(field, value);
        let target = session.resume_target();
        if let Err(e) = session.finish() {
            ui.warning(&format!("{} was not saved: {}", field, e));
            return Ok(CommandResult::failure(1));
        }

        ui.success(&format!("Saved {}", field));
        ui.message(&format!("Next: {}", target));
        Ok(CommandResult::success())
    }
}
