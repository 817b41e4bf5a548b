use crate::hierarchy::domain::{BulkStep, BulkUpdateRequest, HierarchyLevelSet};
use crate::hierarchy::policies::{ApproverCardinality, HierarchyProfile};
use crate::shared::Result;

/// Builds the bulk save request for a draft level set
pub struct BulkRequestBuilder;

impl BulkRequestBuilder {
    /// # Errors
    /// Returns `HierarchyError::IncompleteContext` if the draft's context key
    /// is not fully specified
    pub fn build(profile: &HierarchyProfile, draft: &HierarchyLevelSet) -> Result<BulkUpdateRequest> {
        let context = draft
            .context_key()
            .require_complete()?
            .into_iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect();

        let steps = draft
            .levels()
            .iter()
            .filter(|level| profile.submit_filter().includes(level.approvers().len()))
            .map(|level| {
                let ids: Vec<String> = level
                    .approvers()
                    .iter()
                    .map(|approver| approver.identity().to_string())
                    .collect();

                let (approver_id, approver_ids) = match profile.cardinality() {
                    ApproverCardinality::Single => (ids.into_iter().next(), None),
                    ApproverCardinality::Multi => (None, Some(ids)),
                };

                BulkStep {
                    level: level.ordinal().get(),
                    approver_id,
                    approver_ids,
                    status: level.is_active(),
                }
            })
            .collect();

        Ok(BulkUpdateRequest {
            module: profile.module(),
            context,
            approval_type_id: draft.approval_type_id().map(str::to_string),
            steps,
        })
    }
}
