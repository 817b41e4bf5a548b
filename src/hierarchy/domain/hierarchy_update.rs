use super::HierarchyModule;
use serde::Serialize;
use std::collections::BTreeMap;

/// Immediate status change of a single level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelStatusUpdate {
    #[serde(skip)]
    pub module: HierarchyModule,
    /// Grouping record the level belongs to
    #[serde(rename = "id")]
    pub approval_type_id: String,
    pub level: u32,
    pub status: bool,
}

/// Bulk save of a whole level set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateRequest {
    #[serde(skip)]
    pub module: HierarchyModule,
    /// Context fields, serialized inline (`companyId`, `scopeId`, ...)
    #[serde(flatten)]
    pub context: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_type_id: Option<String>,
    pub steps: Vec<BulkStep>,
}

impl BulkUpdateRequest {
    /// True when no grouping record exists yet and the backend must create one
    pub fn is_create(&self) -> bool {
        self.approval_type_id.is_none()
    }
}

/// One level inside a bulk save.
///
/// Exactly one of `approver_id` (single-approver modules) or
/// `approver_ids` (multi-approver modules) is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStep {
    pub level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_ids: Option<Vec<String>>,
    pub status: bool,
}
