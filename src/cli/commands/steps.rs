//! Steps command implementation.
//!
//! The `storynest steps` command lists the registry in screen order with the
//! fields each step checks.

use crate::cli::args::StepsArgs;
use crate::error::Result;
use crate::steps::{StepInfo, StepRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The steps command implementation.
pub struct StepsCommand {
    registry: StepRegistry,
    args: StepsArgs,
}

impl StepsCommand {
    /// Create a new steps command over the onboarding registry.
    pub fn new(args: StepsArgs) -> Self {
        Self {
            registry: StepRegistry::onboarding(),
            args,
        }
    }
}

impl Command for StepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let infos: Vec<StepInfo> = self
            .registry
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| StepInfo::new(i, step))
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&infos).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("StoryNest onboarding - Steps");
        let width = infos.iter().map(|i| i.path.len()).max().unwrap_or(0);
        for info in &infos {
            ui.message(&format!(
                "  {:>2}. {:<width$}  {}",
                info.index + 1,
                info.path,
                info.check,
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_steps_in_order() {
        let mut ui = MockUI::new();
        StepsCommand::new(StepsArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages().len(), 15);
        assert!(ui.messages()[0].contains("1. goals"));
        assert!(ui.messages()[1].contains("childName + childAge"));
        assert!(ui.messages()[14].contains("mascotId | mascotImageUrl"));
    }

    #[test]
    fn json_lists_fields() {
        let mut ui = MockUI::new();
        StepsCommand::new(StepsArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.data()[0]).unwrap();
        assert_eq!(value[2]["path"], "child-gender");
        assert_eq!(value[2]["fields"][0], "childGender");
    }
}
