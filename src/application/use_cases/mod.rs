/// Use cases module containing application business logic orchestration
mod edit_hierarchy;
mod load_approver_directory;
mod load_hierarchy;

pub use edit_hierarchy::EditHierarchyUseCase;
pub use load_approver_directory::ApproverDirectoryLoader;
pub use load_hierarchy::HierarchyLoader;
