use super::BulkRequestBuilder;
use crate::hierarchy::domain::{
    ApproverRef, BulkUpdateRequest, ContextKey, HierarchyLevelSet, LevelStatusUpdate, Ordinal,
};
use crate::hierarchy::policies::HierarchyProfile;
use crate::shared::error::HierarchyError;
use crate::shared::Result;

/// Which level, if any, is open for approver editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    EditingLevel(Ordinal),
}

/// HierarchyEditor - in-memory draft of one context's level set
///
/// At most one level is open for editing at a time. `dirty` is set by any
/// local approver change and cleared only when a fresh server copy replaces
/// the draft (after a save or a status toggle) or the context changes.
#[derive(Debug, Clone)]
pub struct HierarchyEditor {
    profile: HierarchyProfile,
    draft: HierarchyLevelSet,
    mode: EditorMode,
    dirty: bool,
}

impl HierarchyEditor {
    /// Creates an editor holding the scaffold for `context_key`
    pub fn new(profile: HierarchyProfile, context_key: ContextKey) -> Result<Self> {
        Self::check_module(&profile, &context_key)?;
        Ok(Self {
            draft: HierarchyLevelSet::scaffold(context_key, profile.level_count()),
            profile,
            mode: EditorMode::Viewing,
            dirty: false,
        })
    }

    pub fn profile(&self) -> &HierarchyProfile {
        &self.profile
    }

    pub fn draft(&self) -> &HierarchyLevelSet {
        &self.draft
    }

    pub fn context_key(&self) -> &ContextKey {
        self.draft.context_key()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_editing(&self, ordinal: Ordinal) -> bool {
        self.mode == EditorMode::EditingLevel(ordinal)
    }

    /// Opens `ordinal` for editing, closing whichever level was open
    pub fn begin_edit(&mut self, ordinal: Ordinal) -> Result<()> {
        self.draft.level(ordinal)?;
        self.mode = EditorMode::EditingLevel(ordinal);
        Ok(())
    }

    /// Closes `ordinal` if it is the open level; otherwise nothing changes
    pub fn end_edit(&mut self, ordinal: Ordinal) -> Result<()> {
        self.draft.level(ordinal)?;
        if self.is_editing(ordinal) {
            self.mode = EditorMode::Viewing;
        }
        Ok(())
    }

    /// Replaces a level's approvers in the draft.
    ///
    /// Duplicates, an empty list and self-approval are all accepted here;
    /// the backend owns those rules.
    pub fn set_approvers(&mut self, ordinal: Ordinal, approvers: Vec<ApproverRef>) -> Result<()> {
        self.draft.level_mut(ordinal)?.replace_approvers(approvers);
        self.dirty = true;
        Ok(())
    }

    /// Drops the draft and starts over with the scaffold for a new context
    pub fn switch_context(&mut self, context_key: ContextKey) -> Result<()> {
        Self::check_module(&self.profile, &context_key)?;
        self.draft = HierarchyLevelSet::scaffold(context_key, self.profile.level_count());
        self.mode = EditorMode::Viewing;
        self.dirty = false;
        Ok(())
    }

    /// Installs a freshly loaded level set as the new clean draft
    pub fn replace_draft(&mut self, level_set: HierarchyLevelSet) -> Result<()> {
        if level_set.level_count() != self.profile.level_count() {
            return Err(HierarchyError::Validation {
                message: format!(
                    "Loaded hierarchy has {} levels, expected {}",
                    level_set.level_count(),
                    self.profile.level_count()
                ),
            }
            .into());
        }
        Self::check_module(&self.profile, level_set.context_key())?;
        self.draft = level_set;
        self.mode = EditorMode::Viewing;
        self.dirty = false;
        Ok(())
    }

    /// Text of the yes/no question asked before toggling a level
    pub fn toggle_prompt(&self, ordinal: Ordinal) -> Result<String> {
        let level = self.draft.level(ordinal)?;
        let transition = if level.is_active() {
            "deactivate"
        } else {
            "activate"
        };
        Ok(format!("Level {}: {}", ordinal, transition))
    }

    /// Request that flips the level's active flag on the server
    ///
    /// # Errors
    /// Returns `HierarchyError::NotYetConfigured` when the hierarchy has never
    /// been saved, since there is no grouping record to update
    pub fn status_update(&self, ordinal: Ordinal) -> Result<LevelStatusUpdate> {
        let level = self.draft.level(ordinal)?;
        let approval_type_id = self
            .draft
            .approval_type_id()
            .ok_or(HierarchyError::NotYetConfigured {
                level: ordinal.get(),
            })?;

        Ok(LevelStatusUpdate {
            module: self.profile.module(),
            approval_type_id: approval_type_id.to_string(),
            level: ordinal.get(),
            status: !level.is_active(),
        })
    }

    pub fn bulk_request(&self) -> Result<BulkUpdateRequest> {
        BulkRequestBuilder::build(&self.profile, &self.draft)
    }

    fn check_module(profile: &HierarchyProfile, context_key: &ContextKey) -> Result<()> {
        if context_key.module() != profile.module() {
            return Err(HierarchyError::ModuleMismatch {
                expected: profile.module().to_string(),
                actual: context_key.module().to_string(),
            }
            .into());
        }
        Ok(())
    }
}
