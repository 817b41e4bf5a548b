pub mod approver;
pub mod context_key;
pub mod hierarchy_snapshot;
pub mod hierarchy_update;
pub mod level;
pub mod level_set;
pub mod module;
pub mod ordinal;
pub mod record_id;
pub mod session;

pub use approver::{ApproverId, ApproverRef};
pub use context_key::ContextKey;
pub use hierarchy_snapshot::{HierarchySnapshot, PersistedStep};
pub use hierarchy_update::{BulkStep, BulkUpdateRequest, LevelStatusUpdate};
pub use level::Level;
pub use level_set::HierarchyLevelSet;
pub use module::HierarchyModule;
pub use ordinal::Ordinal;
pub use record_id::{LocalId, RecordId};
pub use session::{Permission, Principal, Role, Session};
