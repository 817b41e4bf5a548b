use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output` given means a file, otherwise stdout
    pub fn from_output(output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }
}

/// Factory for output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
