use crate::hierarchy::domain::{ApproverRef, ContextKey};
use crate::ports::outbound::{ApproverDirectory, StatusReporter};

/// ApproverDirectoryLoader - loads the approvers eligible for a context
///
/// Never fails: an incomplete context or a failed fetch yields an empty
/// directory, and the failure is only logged, so selection degrades to
/// "no choices" instead of aborting the editor.
pub struct ApproverDirectoryLoader<'a, D: ?Sized, S: ?Sized> {
    directory: &'a D,
    reporter: &'a S,
}

impl<'a, D, S> ApproverDirectoryLoader<'a, D, S>
where
    D: ApproverDirectory + ?Sized,
    S: StatusReporter + ?Sized,
{
    pub fn new(directory: &'a D, reporter: &'a S) -> Self {
        Self {
            directory,
            reporter,
        }
    }

    pub async fn load(&self, context_key: &ContextKey) -> Vec<ApproverRef> {
        if !context_key.is_complete() {
            return Vec::new();
        }

        match self.directory.fetch_approvers(context_key).await {
            Ok(approvers) => {
                self.reporter.report(&format!(
                    "👥 Loaded {} eligible approver(s)",
                    approvers.len()
                ));
                approvers
            }
            Err(e) => {
                self.reporter.report_warning(&format!(
                    "⚠️  Warning: Could not load approvers for {}: {}",
                    context_key, e
                ));
                Vec::new()
            }
        }
    }
}
