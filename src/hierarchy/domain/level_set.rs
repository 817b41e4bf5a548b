use super::{ContextKey, Level, Ordinal};
use crate::shared::error::HierarchyError;
use crate::shared::Result;

/// The full, ordered set of levels for one context.
///
/// Always holds exactly one level per ordinal `1..=N`; levels can be
/// replaced in place but never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyLevelSet {
    context_key: ContextKey,
    levels: Vec<Level>,
    approval_type_id: Option<String>,
}

impl HierarchyLevelSet {
    /// All-placeholder set: every level active, no approvers, nothing persisted
    pub fn scaffold(context_key: ContextKey, level_count: u32) -> Self {
        Self {
            context_key,
            levels: Ordinal::range(level_count).map(Level::scaffold).collect(),
            approval_type_id: None,
        }
    }

    pub fn context_key(&self) -> &ContextKey {
        &self.context_key
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Identifier of the parent grouping record, present once any level was saved
    pub fn approval_type_id(&self) -> Option<&str> {
        self.approval_type_id.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.approval_type_id.is_some()
    }

    pub fn level(&self, ordinal: Ordinal) -> Result<&Level> {
        self.levels
            .get(ordinal.index())
            .ok_or_else(|| self.invalid(ordinal))
    }

    pub(crate) fn level_mut(&mut self, ordinal: Ordinal) -> Result<&mut Level> {
        let error = self.invalid(ordinal);
        self.levels.get_mut(ordinal.index()).ok_or(error)
    }

    /// Levels in ordinal order; slots can be rewritten but the set cannot grow
    pub(crate) fn levels_mut(&mut self) -> &mut [Level] {
        &mut self.levels
    }

    pub(crate) fn set_approval_type_id(&mut self, approval_type_id: Option<String>) {
        self.approval_type_id = approval_type_id;
    }

    fn invalid(&self, ordinal: Ordinal) -> anyhow::Error {
        HierarchyError::InvalidOrdinal {
            level: i64::from(ordinal.get()),
            level_count: self.level_count(),
        }
        .into()
    }
}
