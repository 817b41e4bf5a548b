use crate::ports::outbound::UserInteraction;
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Reads a y/N answer from a line of input; anything but yes is no
fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// TerminalInteraction adapter asking questions on stderr and reading stdin
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInteraction for TerminalInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt.bold());
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => parse_answer(&line),
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message.red());
    }
}

/// Non-interactive adapter for `--yes`: every question is answered yes
pub struct AutoConfirm;

impl UserInteraction for AutoConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprintln!("{} [y/N] yes (--yes)", prompt);
        true
    }

    fn alert(&self, message: &str) {
        TerminalInteraction.alert(message);
    }
}
