//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, StorynestTheme, UserInterface};

/// Terminal UI implementation.
///
/// Status output goes to stdout; errors and warnings go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: StorynestTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI with colors explicitly on or off.
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            StorynestTheme::new()
        } else {
            StorynestTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn data(&mut self, payload: &str) {
        writeln!(self.out, "{}", payload).ok();
    }
}
