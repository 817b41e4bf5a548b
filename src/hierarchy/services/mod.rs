pub mod bulk_request_builder;
pub mod hierarchy_editor;
pub mod hierarchy_merger;

pub use bulk_request_builder::BulkRequestBuilder;
pub use hierarchy_editor::{EditorMode, HierarchyEditor};
pub use hierarchy_merger::HierarchyMerger;
