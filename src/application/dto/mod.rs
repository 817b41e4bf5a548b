/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod assignment_plan;
mod mutation_outcome;
mod output_format;

pub use assignment_plan::{AssignmentPlan, PlannedLevel};
pub use mutation_outcome::MutationOutcome;
pub use output_format::OutputFormat;
