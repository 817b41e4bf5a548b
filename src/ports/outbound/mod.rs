/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend API, console, file system).
pub mod approver_directory;
pub mod formatter;
pub mod hierarchy_repository;
pub mod output_presenter;
pub mod plan_reader;
pub mod status_reporter;
pub mod user_interaction;

pub use approver_directory::ApproverDirectory;
pub use formatter::HierarchyFormatter;
pub use hierarchy_repository::HierarchyRepository;
pub use output_presenter::OutputPresenter;
pub use plan_reader::PlanReader;
pub use status_reporter::StatusReporter;
pub use user_interaction::UserInteraction;
