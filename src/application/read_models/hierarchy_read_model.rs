//! Hierarchy read model for query operations

use crate::hierarchy::domain::HierarchyModule;
use serde::Serialize;

/// Loaded hierarchy plus the directory it was resolved against
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyReadModel {
    pub metadata: ReportMetadataView,
    pub module: HierarchyModule,
    pub module_name: String,
    pub context: Vec<ContextFieldView>,
    /// Grouping record id; absent while the hierarchy is not configured
    pub approval_type_id: Option<String>,
    pub configured: bool,
    /// True when the draft holds edits that were not saved
    pub dirty: bool,
    pub levels: Vec<LevelView>,
    pub directory: Vec<ApproverView>,
}

/// Approver directory listing on its own
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryReadModel {
    pub metadata: ReportMetadataView,
    pub module: HierarchyModule,
    pub module_name: String,
    pub context: Vec<ContextFieldView>,
    pub approvers: Vec<ApproverView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of when the view was produced
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextFieldView {
    pub field: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelView {
    pub level: u32,
    pub active: bool,
    pub backing_id: Option<String>,
    pub approvers: Vec<ApproverView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproverView {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
}
