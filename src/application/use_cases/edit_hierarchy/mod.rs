use super::HierarchyLoader;
use crate::application::dto::{AssignmentPlan, MutationOutcome};
use crate::application::read_models::{
    DirectoryReadModel, HierarchyReadModel, HierarchyReadModelBuilder,
};
use crate::hierarchy::domain::{ApproverId, ApproverRef, BulkUpdateRequest, ContextKey, Ordinal};
use crate::hierarchy::policies::HierarchyProfile;
use crate::hierarchy::services::HierarchyEditor;
use crate::ports::outbound::{
    ApproverDirectory, HierarchyRepository, StatusReporter, UserInteraction,
};
use crate::shared::error::{user_facing_message, HierarchyError};
use crate::shared::security::validate_identifier;
use crate::shared::Result;

/// EditHierarchyUseCase - Core use case for maintaining one module's hierarchy
///
/// Owns the editor draft for the selected context together with the approver
/// directory used to resolve display fields. Reads degrade to the scaffold;
/// mutations report failures through `UserInteraction::alert` and return a
/// `MutationOutcome` so the caller can keep going with the draft intact.
///
/// # Type Parameters
/// * `D` - ApproverDirectory implementation
/// * `R` - HierarchyRepository implementation
/// * `U` - UserInteraction implementation
/// * `S` - StatusReporter implementation
pub struct EditHierarchyUseCase<D, R, U, S> {
    directory: D,
    repository: R,
    interaction: U,
    reporter: S,
    editor: HierarchyEditor,
    approvers: Vec<ApproverRef>,
}

impl<D, R, U, S> EditHierarchyUseCase<D, R, U, S>
where
    D: ApproverDirectory,
    R: HierarchyRepository,
    U: UserInteraction,
    S: StatusReporter,
{
    /// Creates the use case with nothing selected yet
    pub fn new(
        profile: HierarchyProfile,
        directory: D,
        repository: R,
        interaction: U,
        reporter: S,
    ) -> Result<Self> {
        let editor = HierarchyEditor::new(profile, ContextKey::empty(profile.module()))?;
        Ok(Self {
            directory,
            repository,
            interaction,
            reporter,
            editor,
            approvers: Vec::new(),
        })
    }

    pub fn editor(&self) -> &HierarchyEditor {
        &self.editor
    }

    /// Approver directory loaded for the current context
    pub fn approvers(&self) -> &[ApproverRef] {
        &self.approvers
    }

    pub fn read_model(&self) -> HierarchyReadModel {
        HierarchyReadModelBuilder::build(&self.editor, &self.approvers)
    }

    pub fn directory_read_model(&self) -> DirectoryReadModel {
        HierarchyReadModelBuilder::build_directory(self.editor.context_key(), &self.approvers)
    }

    /// Selects a new context, discarding the draft, and loads it
    ///
    /// # Errors
    /// Returns an error if the key belongs to another module
    pub async fn switch_context(&mut self, context_key: ContextKey) -> Result<()> {
        self.editor.switch_context(context_key)?;
        self.approvers.clear();
        self.refresh().await
    }

    /// Reloads directory and hierarchy for the current context
    ///
    /// Local edits are discarded. With an incomplete context nothing is
    /// fetched and the scaffold stays in place.
    pub async fn refresh(&mut self) -> Result<()> {
        let profile = *self.editor.profile();
        let context_key = self.editor.context_key().clone();
        let fetching = context_key.is_complete();

        if fetching {
            self.reporter
                .begin_activity(&format!("Loading hierarchy for {}", context_key));
        }

        let (level_set, approvers) =
            HierarchyLoader::new(&self.directory, &self.repository, &self.reporter)
                .load(&profile, context_key)
                .await;

        if fetching {
            self.reporter.end_activity();
        }

        self.editor.replace_draft(level_set)?;
        self.approvers = approvers;
        Ok(())
    }

    pub fn begin_edit(&mut self, level: i64) -> Result<()> {
        let ordinal = self.ordinal(level)?;
        self.editor.begin_edit(ordinal)
    }

    pub fn end_edit(&mut self, level: i64) -> Result<()> {
        let ordinal = self.ordinal(level)?;
        self.editor.end_edit(ordinal)
    }

    /// Replaces a level's approvers, resolving display fields from the directory
    ///
    /// Identities missing from the directory are kept and shown by id.
    pub fn set_approvers(&mut self, level: i64, approver_ids: Vec<ApproverId>) -> Result<()> {
        let ordinal = self.ordinal(level)?;
        let resolved = self.resolve(approver_ids);
        self.editor.set_approvers(ordinal, resolved)
    }

    /// Applies every assignment of a plan to the draft
    ///
    /// The whole plan is checked before anything changes, so a bad entry
    /// leaves the draft untouched.
    ///
    /// # Returns
    /// The number of levels the plan assigned
    pub fn apply_plan(&mut self, plan: &AssignmentPlan) -> Result<usize> {
        let mut assignments: Vec<(Ordinal, Vec<ApproverId>)> = Vec::with_capacity(plan.levels.len());

        for planned in &plan.levels {
            let ordinal = self.ordinal(planned.level)?;
            let mut ids = Vec::with_capacity(planned.approvers.len());
            for approver in &planned.approvers {
                let approver = approver.trim();
                validate_identifier(approver, "approver id").map_err(|e| {
                    HierarchyError::Validation {
                        message: format!("Level {}: {}", planned.level, e),
                    }
                })?;
                ids.push(ApproverId::new(approver));
            }
            assignments.push((ordinal, ids));
        }

        let applied = assignments.len();
        for (ordinal, ids) in assignments {
            let resolved = self.resolve(ids);
            self.editor.set_approvers(ordinal, resolved)?;
        }

        if applied > 0 {
            self.reporter
                .report(&format!("📝 Applied assignments to {} level(s)", applied));
        }
        Ok(applied)
    }

    /// Flips one level's active flag on the server after confirmation
    ///
    /// A successful toggle reloads the hierarchy, which also discards any
    /// unsaved approver edits.
    ///
    /// # Errors
    /// Only for a level outside the module's range; backend failures are
    /// returned as `MutationOutcome::Failed`
    pub async fn toggle_active(&mut self, level: i64) -> Result<MutationOutcome> {
        let ordinal = self.ordinal(level)?;

        let update = match self.editor.status_update(ordinal) {
            Ok(update) => update,
            Err(e) => return Ok(self.fail(&e)),
        };

        let prompt = self.editor.toggle_prompt(ordinal)?;
        if !self.interaction.confirm(&prompt) {
            self.reporter.report("Toggle cancelled, nothing was sent");
            return Ok(MutationOutcome::Declined);
        }

        self.reporter.begin_activity(&format!("Updating level {}", ordinal));
        let result = self.repository.update_level_status(&update).await;
        self.reporter.end_activity();

        if let Err(e) = result {
            return Ok(self.fail(&e));
        }

        let state = if update.status { "activated" } else { "deactivated" };
        self.reporter
            .report_completion(&format!("Level {} {}", ordinal, state));
        self.refresh().await?;
        Ok(MutationOutcome::Completed)
    }

    /// Sends the whole draft in one request and reloads on success
    ///
    /// On failure the draft and its dirty flag are kept so the user can
    /// retry without re-entering anything.
    pub async fn save_all(&mut self) -> Result<MutationOutcome> {
        let request = match self.editor.bulk_request() {
            Ok(request) => request,
            Err(e) => return Ok(self.fail(&e)),
        };

        self.reporter.begin_activity(&format!(
            "Saving {} level(s) for {}",
            request.steps.len(),
            self.editor.context_key()
        ));
        let result = self.repository.save_hierarchy(&request).await;
        self.reporter.end_activity();

        if let Err(e) = result {
            return Ok(self.fail(&e));
        }

        let verb = if request.is_create() { "Created" } else { "Updated" };
        self.reporter.report_completion(&format!(
            "{} hierarchy with {} level(s)",
            verb,
            request.steps.len()
        ));
        self.refresh().await?;
        Ok(MutationOutcome::Completed)
    }

    /// The request `save_all` would send, without sending it
    pub fn pending_request(&self) -> Result<BulkUpdateRequest> {
        self.editor.bulk_request()
    }

    fn ordinal(&self, level: i64) -> Result<Ordinal> {
        self.editor.profile().ordinal(level)
    }

    fn resolve(&self, approver_ids: Vec<ApproverId>) -> Vec<ApproverRef> {
        approver_ids
            .into_iter()
            .map(|id| ApproverRef::resolve(id, &self.approvers))
            .collect()
    }

    fn fail(&self, error: &anyhow::Error) -> MutationOutcome {
        let message = user_facing_message(error);
        self.interaction.alert(&message);
        MutationOutcome::Failed { message }
    }
}
