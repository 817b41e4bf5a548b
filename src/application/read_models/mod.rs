//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that flatten the editor state and the approver
//! directory into what the formatters render.

pub mod hierarchy_read_model;
pub mod hierarchy_read_model_builder;

pub use hierarchy_read_model::{
    ApproverView, ContextFieldView, DirectoryReadModel, HierarchyReadModel, LevelView,
    ReportMetadataView,
};
pub use hierarchy_read_model_builder::HierarchyReadModelBuilder;
