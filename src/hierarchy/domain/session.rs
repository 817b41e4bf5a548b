use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Role of the signed-in principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    HierarchyManager,
    Approver,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::HierarchyManager => "hierarchy-manager",
            Role::Approver => "approver",
            Role::Viewer => "viewer",
        }
    }

    fn grants(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewHierarchy => true,
            Permission::ManageHierarchy => matches!(self, Role::Admin | Role::HierarchyManager),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "admin" => Ok(Role::Admin),
            "hierarchy-manager" | "manager" => Ok(Role::HierarchyManager),
            "approver" => Ok(Role::Approver),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!(
                "Invalid role: {}. Please specify one of: admin, hierarchy-manager, approver, viewer",
                s
            )),
        }
    }
}

/// Action an access decision is made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ViewHierarchy,
    ManageHierarchy,
}

impl Permission {
    fn describe(&self) -> &'static str {
        match self {
            Permission::ViewHierarchy => "view approval hierarchies",
            Permission::ManageHierarchy => "manage approval hierarchies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// The current principal, passed explicitly to wherever access is decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    principal: Principal,
}

impl Session {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Session used when no principal is configured; read-only
    pub fn anonymous() -> Self {
        Self::new(Principal {
            user_id: String::new(),
            username: "anonymous".to_string(),
            role: Role::Viewer,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn can(&self, permission: Permission) -> bool {
        self.principal.role.grants(permission)
    }

    /// # Errors
    /// Returns `HierarchyError::PermissionDenied` when the role lacks the permission
    pub fn authorize(&self, permission: Permission) -> Result<()> {
        if self.can(permission) {
            return Ok(());
        }
        Err(HierarchyError::PermissionDenied {
            username: self.principal.username.clone(),
            role: self.principal.role.to_string(),
            action: permission.describe().to_string(),
        }
        .into())
    }
}
