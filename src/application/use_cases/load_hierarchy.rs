use super::ApproverDirectoryLoader;
use crate::hierarchy::domain::{ApproverRef, ContextKey, HierarchyLevelSet, HierarchySnapshot};
use crate::hierarchy::policies::HierarchyProfile;
use crate::hierarchy::services::HierarchyMerger;
use crate::ports::outbound::{ApproverDirectory, HierarchyRepository, StatusReporter};

/// HierarchyLoader - builds the level set shown for a context
///
/// Fetches the approver directory and the persisted hierarchy concurrently,
/// then merges the persisted levels onto the scaffold. Like the directory
/// loader it never fails: a missing or unreadable hierarchy is treated as
/// "not yet configured" and yields the pure scaffold.
pub struct HierarchyLoader<'a, D: ?Sized, R: ?Sized, S: ?Sized> {
    directory: &'a D,
    repository: &'a R,
    reporter: &'a S,
}

impl<'a, D, R, S> HierarchyLoader<'a, D, R, S>
where
    D: ApproverDirectory + ?Sized,
    R: HierarchyRepository + ?Sized,
    S: StatusReporter + ?Sized,
{
    pub fn new(directory: &'a D, repository: &'a R, reporter: &'a S) -> Self {
        Self {
            directory,
            repository,
            reporter,
        }
    }

    /// Loads the merged level set and the directory used to resolve it
    pub async fn load(
        &self,
        profile: &HierarchyProfile,
        context_key: ContextKey,
    ) -> (HierarchyLevelSet, Vec<ApproverRef>) {
        let directory_loader = ApproverDirectoryLoader::new(self.directory, self.reporter);

        let (approvers, snapshot) = futures::join!(
            directory_loader.load(&context_key),
            self.fetch_snapshot(profile, &context_key)
        );

        let level_set = HierarchyMerger::merge(profile, context_key, snapshot, &approvers);
        (level_set, approvers)
    }

    /// Fetches the persisted hierarchy, degrading every failure to `None`
    pub async fn fetch_snapshot(
        &self,
        profile: &HierarchyProfile,
        context_key: &ContextKey,
    ) -> Option<HierarchySnapshot> {
        if !context_key.is_complete() {
            return None;
        }

        let snapshot = match self.repository.fetch_hierarchy(context_key).await {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                self.reporter.report(&format!(
                    "📭 No hierarchy configured yet for {}",
                    context_key
                ));
                return None;
            }
            Err(e) => {
                self.reporter.report_warning(&format!(
                    "⚠️  Warning: Could not load hierarchy for {}: {}",
                    context_key, e
                ));
                return None;
            }
        };

        let mut ignored: Vec<String> = HierarchyMerger::out_of_range_levels(profile, &snapshot)
            .iter()
            .map(|level| level.to_string())
            .collect();
        ignored.extend(snapshot.unreadable_levels.iter().cloned());
        if !ignored.is_empty() {
            self.reporter.report_warning(&format!(
                "⚠️  Warning: Ignoring level(s) {} outside 1-{}",
                ignored.join(", "),
                profile.level_count()
            ));
        }

        self.reporter.report(&format!(
            "📖 Loaded {} persisted level record(s)",
            snapshot.steps.len()
        ));
        Some(snapshot)
    }
}
