/// Mock implementations for testing
mod mock_approver_directory;
mod mock_hierarchy_repository;
mod mock_status_reporter;
mod mock_user_interaction;

pub use mock_approver_directory::MockApproverDirectory;
pub use mock_hierarchy_repository::MockHierarchyRepository;
pub use mock_status_reporter::MockStatusReporter;
pub use mock_user_interaction::MockUserInteraction;
