use crate::hierarchy::domain::{ApproverRef, ContextKey};
use crate::shared::Result;
use async_trait::async_trait;

/// ApproverDirectory port for listing the identities eligible to approve
///
/// The backend filters the list by role for the given context.
///
/// # Async Support
/// Implementations must be `Send + Sync` so decorators such as the
/// caching directory can share them.
#[async_trait]
pub trait ApproverDirectory: Send + Sync {
    /// Fetches the eligible approvers for a complete context key
    ///
    /// # Errors
    /// Returns an error if the request fails or the response cannot be parsed.
    /// Callers decide how to degrade; the loader turns errors into an empty list.
    async fn fetch_approvers(&self, context_key: &ContextKey) -> Result<Vec<ApproverRef>>;
}
