//! approval-hierarchy - multi-level approval hierarchy maintenance for back-office modules
//!
//! Each back-office module (custom duty, import payment, journal vouchers,
//! credit deviations) routes requests through a fixed number of approval
//! levels. This library loads a module's hierarchy for a context, lets a
//! caller edit approvers per level, toggles levels on and off, and saves the
//! whole set back in one request. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`hierarchy`): level sets, per-module profiles, merge and editor logic
//! - **Application Layer** (`application`): use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST client, console, formatters and filesystem
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use approval_hierarchy::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = RestHierarchyClient::new(RestClientConfig::new("https://backoffice.example.com/api"))?;
//! let profile = HierarchyProfile::for_module(HierarchyModule::Jvm);
//!
//! let mut use_case = EditHierarchyUseCase::new(
//!     profile,
//!     CachingApproverDirectory::new(client.clone()),
//!     client,
//!     TerminalInteraction::new(),
//!     StderrStatusReporter::new(),
//! )?;
//!
//! let key = ContextKey::from_pairs(HierarchyModule::Jvm, [("requesterId", "u-17")])?;
//! use_case.switch_context(key).await?;
//! use_case.set_approvers(1, vec![ApproverId::new("u-42")])?;
//! let outcome = use_case.save_all().await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        AutoConfirm, StderrStatusReporter, TerminalInteraction,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{
        CachingApproverDirectory, EndpointCatalog, ModuleEndpoints, RestClientConfig,
        RestHierarchyClient,
    };
    pub use crate::application::dto::{AssignmentPlan, MutationOutcome, OutputFormat, PlannedLevel};
    pub use crate::application::use_cases::{
        ApproverDirectoryLoader, EditHierarchyUseCase, HierarchyLoader,
    };
    pub use crate::hierarchy::domain::{
        ApproverId, ApproverRef, BulkUpdateRequest, ContextKey, HierarchyLevelSet,
        HierarchyModule, HierarchySnapshot, Level, LevelStatusUpdate, Ordinal, Permission,
        PersistedStep, Principal, RecordId, Role, Session,
    };
    pub use crate::hierarchy::policies::HierarchyProfile;
    pub use crate::hierarchy::services::{EditorMode, HierarchyEditor, HierarchyMerger};
    pub use crate::ports::outbound::{
        ApproverDirectory, HierarchyFormatter, HierarchyRepository, OutputPresenter, PlanReader,
        StatusReporter, UserInteraction,
    };
    pub use crate::shared::error::{ExitCode, HierarchyError};
    pub use crate::shared::Result;
}
