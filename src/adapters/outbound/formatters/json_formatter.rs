use crate::application::read_models::{DirectoryReadModel, HierarchyReadModel};
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering read models as pretty-printed JSON
///
/// Field names follow the read models (`snake_case`); this is the
/// scripting-friendly output, not the backend wire format.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyFormatter for JsonFormatter {
    fn format_hierarchy(&self, model: &HierarchyReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }

    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}
