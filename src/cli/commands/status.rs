//! Status command implementation.
//!
//! The `storynest status` command shows per-step onboarding progress.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};
use super::display;

/// The status command implementation.
pub struct StatusCommand {
    context: CommandContext,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(context: CommandContext, args: StatusArgs) -> Self {
        Self { context, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = self.context.open_session();
        let report = session.report();

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("StoryNest onboarding - Status");

        if !report.has_progress {
            ui.message("No answers recorded yet.");
            ui.message("");
        }

        ui.message("Steps:");
        for step in &report.steps {
            display::show_step(ui, step, report.resume_step);
        }
        ui.message("");
        display::show_summary(ui, &report);

        Ok(CommandResult::success())
    }
}
