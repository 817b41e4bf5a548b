/// Console adapters for status output and user prompts
mod interaction;
mod status_reporter;

pub use interaction::{AutoConfirm, TerminalInteraction};
pub use status_reporter::StderrStatusReporter;
