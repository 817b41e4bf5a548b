use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Generic text shown to the user when a failed request carries no readable message.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "The request could not be completed. Please try again later.";

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a declined confirmation
/// from an actual failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed
    Success = 0,
    /// The user declined a confirmation prompt; nothing was sent
    Declined = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Declined => write!(f, "Declined (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for approval hierarchy management.
///
/// Uses thiserror to derive Display and Error traits; messages carry a hint
/// line where the user can act on the problem.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Invalid level {level}: this hierarchy has levels 1 to {level_count}")]
    InvalidOrdinal { level: i64, level_count: u32 },

    #[error("Invalid context field '{field}': {reason}\n\n💡 Hint: {hint}")]
    InvalidContextField {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Context is incomplete: missing {missing}\n\n💡 Hint: Pass the missing value(s) with --context <field>=<value>")]
    IncompleteContext { missing: String },

    #[error("Context belongs to module '{actual}' but the editor is configured for '{expected}'")]
    ModuleMismatch { expected: String, actual: String },

    #[error("Level {level} cannot change status because this hierarchy has not been saved yet\n\n💡 Hint: Assign approvers and save the hierarchy first")]
    NotYetConfigured { level: u32 },

    #[error("Backend returned status {status}{}", backend_detail(.message))]
    Backend { status: u16, message: Option<String> },

    #[error("Failed to read plan file: {path}\nDetails: {details}\n\n💡 Hint: Plans must be YAML (.yml/.yaml) or TOML (.toml) with a 'levels' list")]
    PlanReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Permission denied: user '{username}' with role '{role}' cannot {action}\n\n💡 Hint: Configure a session with an admin or hierarchy-manager role")]
    PermissionDenied {
        username: String,
        role: String,
        action: String,
    },

    /// Validation error for configuration and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}

fn backend_detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

/// Extracts the message to show in a blocking notification for a failed mutation.
///
/// Backend errors surface the server's own message when its payload carried one;
/// domain errors use their display text; anything else gets generic text.
pub fn user_facing_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<HierarchyError>() {
        Some(HierarchyError::Backend {
            message: Some(message),
            ..
        }) => message.clone(),
        Some(HierarchyError::Backend { message: None, .. }) => {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
        Some(other) => other.to_string(),
        None => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}
