use serde::Serialize;
use std::fmt;

/// Opaque identifier of a user or role that can approve
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ApproverId(String);

impl ApproverId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApproverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApproverId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Approver assigned to a level, with display fields denormalized from the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproverRef {
    identity: ApproverId,
    display_name: String,
    email: Option<String>,
}

impl ApproverRef {
    pub fn new(identity: ApproverId, display_name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            identity,
            display_name: display_name.into(),
            email,
        }
    }

    /// Reference for an identity the directory does not know; the id doubles as the name
    pub fn unresolved(identity: ApproverId) -> Self {
        let display_name = identity.as_str().to_string();
        Self {
            identity,
            display_name,
            email: None,
        }
    }

    /// Looks the identity up in a directory listing, falling back to an unresolved reference
    pub fn resolve(identity: ApproverId, directory: &[ApproverRef]) -> Self {
        directory
            .iter()
            .find(|entry| entry.identity == identity)
            .cloned()
            .unwrap_or_else(|| Self::unresolved(identity))
    }

    pub fn identity(&self) -> &ApproverId {
        &self.identity
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
