use crate::hierarchy::domain::{
    ApproverRef, ContextKey, HierarchyLevelSet, HierarchySnapshot, Level, PersistedStep, RecordId,
};
use crate::hierarchy::policies::HierarchyProfile;
use std::collections::HashMap;

/// HierarchyMerger lays persisted level records over the default scaffold.
///
/// The result always has exactly one level per ordinal of the profile,
/// whatever the backend returned.
pub struct HierarchyMerger;

impl HierarchyMerger {
    /// Merges a snapshot onto a fresh scaffold for `context_key`.
    ///
    /// - `None` (not configured, or the fetch failed) yields the pure scaffold
    /// - Steps whose level falls outside `1..=N` are ignored
    /// - When two steps share a level the later one wins
    /// - Approver identities are resolved against `directory` for display
    pub fn merge(
        profile: &HierarchyProfile,
        context_key: ContextKey,
        snapshot: Option<HierarchySnapshot>,
        directory: &[ApproverRef],
    ) -> HierarchyLevelSet {
        let mut level_set = HierarchyLevelSet::scaffold(context_key, profile.level_count());

        let Some(snapshot) = snapshot else {
            return level_set;
        };

        level_set.set_approval_type_id(Some(snapshot.approval_type_id));

        // later steps overwrite earlier ones at the same level
        let mut by_level: HashMap<i64, PersistedStep> = snapshot
            .steps
            .into_iter()
            .map(|step| (step.level, step))
            .collect();

        for slot in level_set.levels_mut() {
            let ordinal = slot.ordinal();
            let Some(step) = by_level.remove(&i64::from(ordinal.get())) else {
                continue;
            };

            let record = match step.backing_id {
                Some(id) => RecordId::confirmed(id),
                None => RecordId::pending(),
            };
            let approvers = step
                .approver_ids
                .into_iter()
                .map(|id| ApproverRef::resolve(id, directory))
                .collect();

            *slot = Level::persisted(ordinal, record, approvers, step.active);
        }

        level_set
    }

    /// Levels in the snapshot that the merge will drop
    pub fn out_of_range_levels(profile: &HierarchyProfile, snapshot: &HierarchySnapshot) -> Vec<i64> {
        snapshot
            .steps
            .iter()
            .map(|step| step.level)
            .filter(|level| profile.ordinal(*level).is_err())
            .collect()
    }
}
