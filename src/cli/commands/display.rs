//! Shared display helpers for onboarding progress.
//!
//! Used by `status` to render progress consistently.

use crate::steps::{ProgressReport, StepProgress};
use crate::ui::UserInterface;

const BAR_WIDTH: usize = 20;

/// Render a fixed-width progress bar, e.g. `[████░░░░]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bracketed marker for a step (non-TTY friendly).
pub fn step_symbol(step: &StepProgress) -> &'static str {
    if step.complete {
        "[done]"
    } else {
        "[pending]"
    }
}

/// Print one step line, marking the resume step.
pub fn show_step(ui: &mut dyn UserInterface, step: &StepProgress, resume_step: &str) {
    let line = format!("  {} {}", step_symbol(step), step.path);
    if step.complete {
        ui.success(&line);
    } else if step.path == resume_step {
        ui.message(&format!("{}  <- resume here", line));
    } else {
        ui.message(&line);
    }
}

/// Print the progress summary line.
pub fn show_summary(ui: &mut dyn UserInterface, report: &ProgressReport) {
    ui.message(&format!(
        "Progress: {} {}/{} ({}%)",
        progress_bar(report.fraction, BAR_WIDTH),
        report.completed,
        report.total,
        report.percent()
    ));
    if report.is_finished() {
        ui.success("Onboarding complete");
    } else {
        ui.message(&format!("Resume at: {}", report.resume_step));
    }
}
