use crate::application::read_models::{
    ApproverView, ContextFieldView, DirectoryReadModel, HierarchyReadModel, LevelView,
    ReportMetadataView,
};
use crate::ports::outbound::HierarchyFormatter;
use crate::shared::Result;

const CONTEXT_TABLE_HEADER: &str = "| Field | Value |\n|-------|-------|\n";

const LEVEL_TABLE_HEADER: &str = "| Level | Status | Approvers |\n|-------|--------|-----------|\n";

const APPROVER_TABLE_HEADER: &str = "| ID | Name | Email |\n|----|------|-------|\n";

/// MarkdownFormatter adapter rendering hierarchies as Markdown tables
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn describe_approver(approver: &ApproverView) -> String {
        let label = if approver.display_name == approver.id {
            approver.id.clone()
        } else {
            format!("{} ({})", approver.display_name, approver.id)
        };
        Self::escape_cell(&label)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_context(&self, output: &mut String, context: &[ContextFieldView]) {
        output.push_str("## Context\n\n");
        output.push_str(CONTEXT_TABLE_HEADER);
        for field in context {
            output.push_str(&format!(
                "| {} | {} |\n",
                field.field,
                field
                    .value
                    .as_deref()
                    .map(Self::escape_cell)
                    .unwrap_or_else(|| "*not selected*".to_string())
            ));
        }
        output.push('\n');
    }

    fn render_status(&self, output: &mut String, model: &HierarchyReadModel) {
        match &model.approval_type_id {
            Some(id) => output.push_str(&format!(
                "**Approval type:** `{}`\n\n",
                Self::escape_cell(id)
            )),
            None => output.push_str(
                "*Not configured yet. The levels below are an empty scaffold until the hierarchy is saved.*\n\n",
            ),
        }
        if model.dirty {
            output.push_str("⚠️ **Unsaved changes**\n\n");
        }
    }

    fn render_levels(&self, output: &mut String, levels: &[LevelView]) {
        output.push_str("## Levels\n\n");
        output.push_str(LEVEL_TABLE_HEADER);
        for level in levels {
            let status = if level.active { "Active" } else { "Inactive" };
            let approvers = if level.approvers.is_empty() {
                "*None*".to_string()
            } else {
                level
                    .approvers
                    .iter()
                    .map(Self::describe_approver)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output.push_str(&format!("| {} | {} | {} |\n", level.level, status, approvers));
        }
        output.push('\n');
    }

    fn render_approvers(&self, output: &mut String, heading: &str, approvers: &[ApproverView]) {
        output.push_str(&format!("## {}\n\n", heading));
        if approvers.is_empty() {
            output.push_str("*No eligible approvers*\n\n");
            return;
        }

        output.push_str(APPROVER_TABLE_HEADER);
        for approver in approvers {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&approver.id),
                Self::escape_cell(&approver.display_name),
                approver
                    .email
                    .as_deref()
                    .map(Self::escape_cell)
                    .unwrap_or_default()
            ));
        }
        output.push('\n');
    }

    fn render_footer(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str("---\n\n");
        output.push_str(&format!(
            "*Generated by {} {} at {}*\n",
            metadata.tool_name, metadata.tool_version, metadata.generated_at
        ));
    }
}

impl HierarchyFormatter for MarkdownFormatter {
    fn format_hierarchy(&self, model: &HierarchyReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Approval Hierarchy: {}\n\n", model.module_name));

        self.render_context(&mut output, &model.context);
        self.render_status(&mut output, model);
        self.render_levels(&mut output, &model.levels);
        self.render_approvers(&mut output, "Eligible Approvers", &model.directory);
        self.render_footer(&mut output, &model.metadata);

        Ok(output)
    }

    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Eligible Approvers: {}\n\n", model.module_name));

        self.render_context(&mut output, &model.context);
        self.render_approvers(&mut output, "Approvers", &model.approvers);
        self.render_footer(&mut output, &model.metadata);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::domain::HierarchyModule;

    fn metadata() -> ReportMetadataView {
        ReportMetadataView {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            tool_name: "hierarchy-admin".to_string(),
            tool_version: "0.1.0".to_string(),
        }
    }

    fn approver(id: &str, name: &str) -> ApproverView {
        ApproverView {
            id: id.to_string(),
            display_name: name.to_string(),
            email: None,
        }
    }

    fn model(approval_type_id: Option<&str>, dirty: bool) -> HierarchyReadModel {
        HierarchyReadModel {
            metadata: metadata(),
            module: HierarchyModule::Jvm,
            module_name: "Journal Voucher".to_string(),
            context: vec![ContextFieldView {
                field: "requesterId".to_string(),
                value: Some("r-1".to_string()),
            }],
            approval_type_id: approval_type_id.map(str::to_string),
            configured: approval_type_id.is_some(),
            dirty,
            levels: vec![
                LevelView {
                    level: 1,
                    active: true,
                    backing_id: Some("s1".to_string()),
                    approvers: vec![approver("u1", "amina"), approver("u9", "u9")],
                },
                LevelView {
                    level: 2,
                    active: false,
                    backing_id: None,
                    approvers: vec![],
                },
            ],
            directory: vec![approver("u1", "a|b")],
        }
    }

    #[test]
    fn test_levels_table() {
        let output = MarkdownFormatter::new()
            .format_hierarchy(&model(Some("at-1"), false))
            .unwrap();

        assert!(output.starts_with("# Approval Hierarchy: Journal Voucher\n"));
        assert!(output.contains("| 1 | Active | amina (u1), u9 |"));
        assert!(output.contains("| 2 | Inactive | *None* |"));
        assert!(output.contains("**Approval type:** `at-1`"));
        assert!(!output.contains("Unsaved changes"));
    }

    #[test]
    fn test_unconfigured_and_dirty_notes() {
        let output = MarkdownFormatter::new()
            .format_hierarchy(&model(None, true))
            .unwrap();

        assert!(output.contains("Not configured yet"));
        assert!(output.contains("Unsaved changes"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let output = MarkdownFormatter::new()
            .format_hierarchy(&model(None, false))
            .unwrap();
        assert!(output.contains("| u1 | a\\|b |  |"));
    }

    #[test]
    fn test_directory_without_approvers() {
        let directory = DirectoryReadModel {
            metadata: metadata(),
            module: HierarchyModule::Jvm,
            module_name: "Journal Voucher".to_string(),
            context: vec![ContextFieldView {
                field: "requesterId".to_string(),
                value: None,
            }],
            approvers: vec![],
        };

        let output = MarkdownFormatter::new().format_directory(&directory).unwrap();

        assert!(output.contains("| requesterId | *not selected* |"));
        assert!(output.contains("*No eligible approvers*"));
    }
}
