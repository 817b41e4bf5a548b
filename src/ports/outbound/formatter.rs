use crate::application::read_models::{DirectoryReadModel, HierarchyReadModel};
use crate::shared::Result;

/// HierarchyFormatter port for rendering read models (JSON, Markdown, etc.)
pub trait HierarchyFormatter {
    /// Formats a loaded hierarchy together with its approver directory
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_hierarchy(&self, model: &HierarchyReadModel) -> Result<String>;

    /// Formats an approver directory listing
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String>;
}
