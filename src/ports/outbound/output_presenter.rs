use crate::shared::Result;

/// OutputPresenter port for delivering rendered hierarchies and directories
///
/// Implementations decide where the text ends up: stdout for piping, or a
/// file chosen with `--output`.
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
