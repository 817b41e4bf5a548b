//! Builder for constructing read models from the editor state

use super::hierarchy_read_model::{
    ApproverView, ContextFieldView, DirectoryReadModel, HierarchyReadModel, LevelView,
    ReportMetadataView,
};
use crate::hierarchy::domain::{ApproverRef, ContextKey, Level};
use crate::hierarchy::services::HierarchyEditor;
use chrono::Utc;

const TOOL_NAME: &str = "hierarchy-admin";

pub struct HierarchyReadModelBuilder;

impl HierarchyReadModelBuilder {
    pub fn build(editor: &HierarchyEditor, directory: &[ApproverRef]) -> HierarchyReadModel {
        let draft = editor.draft();
        let module = editor.profile().module();

        HierarchyReadModel {
            metadata: Self::build_metadata(),
            module,
            module_name: module.display_name().to_string(),
            context: Self::build_context(draft.context_key()),
            approval_type_id: draft.approval_type_id().map(str::to_string),
            configured: draft.is_configured(),
            dirty: editor.is_dirty(),
            levels: draft.levels().iter().map(Self::build_level).collect(),
            directory: directory.iter().map(Self::build_approver).collect(),
        }
    }

    pub fn build_directory(context_key: &ContextKey, directory: &[ApproverRef]) -> DirectoryReadModel {
        let module = context_key.module();
        DirectoryReadModel {
            metadata: Self::build_metadata(),
            module,
            module_name: module.display_name().to_string(),
            context: Self::build_context(context_key),
            approvers: directory.iter().map(Self::build_approver).collect(),
        }
    }

    fn build_metadata() -> ReportMetadataView {
        ReportMetadataView {
            generated_at: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_context(context_key: &ContextKey) -> Vec<ContextFieldView> {
        context_key
            .fields()
            .into_iter()
            .map(|(field, value)| ContextFieldView {
                field: field.to_string(),
                value: value.map(str::to_string),
            })
            .collect()
    }

    fn build_level(level: &Level) -> LevelView {
        LevelView {
            level: level.ordinal().get(),
            active: level.is_active(),
            backing_id: level.backing_id().map(str::to_string),
            approvers: level.approvers().iter().map(Self::build_approver).collect(),
        }
    }

    fn build_approver(approver: &ApproverRef) -> ApproverView {
        ApproverView {
            id: approver.identity().to_string(),
            display_name: approver.display_name().to_string(),
            email: approver.email().map(str::to_string),
        }
    }
}
