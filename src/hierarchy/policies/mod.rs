pub mod hierarchy_profile;

pub use hierarchy_profile::{ApproverCardinality, HierarchyProfile, SubmitFilter};
