use crate::application::dto::AssignmentPlan;
use crate::shared::Result;
use std::path::Path;

/// PlanReader port for loading approver assignment plans
pub trait PlanReader {
    /// Reads and parses a plan file
    ///
    /// # Errors
    /// Returns `HierarchyError::PlanReadError` if the file is missing,
    /// unsafe to read, or not a valid plan
    fn read_plan(&self, path: &Path) -> Result<AssignmentPlan>;
}
