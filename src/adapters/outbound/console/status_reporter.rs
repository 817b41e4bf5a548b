use crate::ports::outbound::StatusReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(80);

/// StderrStatusReporter adapter for reporting status to stderr
///
/// Keeps stdout free for the rendered hierarchy. Round trips to the backend
/// show an indicatif spinner that is cleared before any other line is printed.
pub struct StderrStatusReporter {
    spinner: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrStatusReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: false,
        }
    }

    /// Reporter that prints only warnings
    pub fn quiet() -> Self {
        Self {
            spinner: RefCell::new(None),
            quiet: true,
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrStatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for StderrStatusReporter {
    fn report(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_warning(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message.yellow());
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!("{} {}", "✅".green(), message.green());
        }
    }

    fn begin_activity(&self, message: &str) {
        self.clear_spinner();
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn end_activity(&self) {
        self.clear_spinner();
    }
}
