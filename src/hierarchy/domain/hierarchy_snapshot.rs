use super::ApproverId;

/// Persisted state of a hierarchy as reported by the backend.
///
/// `level` is kept raw: records outside the module's range are possible
/// and are dropped during the merge, not here. Records whose level could not
/// be read at all are listed in `unreadable_levels` by their raw label.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchySnapshot {
    pub approval_type_id: String,
    pub steps: Vec<PersistedStep>,
    pub unreadable_levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersistedStep {
    pub backing_id: Option<String>,
    pub level: i64,
    pub approver_ids: Vec<ApproverId>,
    pub active: bool,
}

impl PersistedStep {
    pub fn new(level: i64, approver_ids: Vec<ApproverId>, active: bool) -> Self {
        Self {
            backing_id: None,
            level,
            approver_ids,
            active,
        }
    }

    pub fn with_backing_id(mut self, backing_id: impl Into<String>) -> Self {
        self.backing_id = Some(backing_id.into());
        self
    }
}
