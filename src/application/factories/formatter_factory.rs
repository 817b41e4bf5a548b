use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::HierarchyFormatter;

/// Picks the formatter adapter for a requested output format
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use approval_hierarchy::application::dto::OutputFormat;
    /// use approval_hierarchy::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn HierarchyFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}
