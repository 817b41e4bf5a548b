use crate::hierarchy::domain::{
    BulkUpdateRequest, ContextKey, HierarchySnapshot, LevelStatusUpdate,
};
use crate::shared::Result;
use async_trait::async_trait;

/// HierarchyRepository port for reading and writing persisted hierarchies
///
/// This port abstracts the back-office REST backend. Each module has its
/// own endpoints; implementations route by `HierarchyModule`.
#[async_trait]
pub trait HierarchyRepository: Send + Sync {
    /// Fetches the persisted levels for a complete context key
    ///
    /// # Returns
    /// `None` when the context has no grouping record yet
    ///
    /// # Errors
    /// Returns an error if the request fails or the response is unreadable
    async fn fetch_hierarchy(&self, context_key: &ContextKey) -> Result<Option<HierarchySnapshot>>;

    /// Changes one level's active status immediately
    ///
    /// # Errors
    /// Returns `HierarchyError::Backend` carrying the server's message when
    /// the backend rejects the change
    async fn update_level_status(&self, update: &LevelStatusUpdate) -> Result<()>;

    /// Saves the whole level set, creating the grouping record if needed
    ///
    /// # Errors
    /// Returns `HierarchyError::Backend` carrying the server's message when
    /// the backend rejects the save
    async fn save_hierarchy(&self, request: &BulkUpdateRequest) -> Result<()>;
}
