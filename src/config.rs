//! Configuration file support for hierarchy-admin.
//!
//! Provides YAML-based configuration through `hierarchy-admin.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use approval_hierarchy::adapters::outbound::network::{EndpointCatalog, ModuleEndpoints};
use approval_hierarchy::application::dto::OutputFormat;
use approval_hierarchy::hierarchy::domain::{HierarchyModule, Principal, Role, Session};
use approval_hierarchy::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "hierarchy-admin.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Name of the environment variable holding the bearer token
    pub auth_token_env: Option<String>,
    pub module: Option<String>,
    /// Default context fields, e.g. `companyId: C-001`
    pub context: Option<BTreeMap<String, String>>,
    pub format: Option<String>,
    pub session: Option<SessionConfig>,
    /// Per-module endpoint path overrides, keyed by module slug
    pub endpoints: Option<HashMap<String, EndpointConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The principal commands run as.
#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: Option<String>,
    pub username: String,
    pub role: String,
}

/// Endpoint paths for one module; omitted paths keep their defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    pub directory: Option<String>,
    pub hierarchy: Option<String>,
    pub status: Option<String>,
}

impl ConfigFile {
    /// Session for the configured principal, anonymous when none is configured
    pub fn session(&self) -> Result<Session> {
        let Some(session) = &self.session else {
            return Ok(Session::anonymous());
        };

        let role = Role::from_str(&session.role).map_err(anyhow::Error::msg)?;
        Ok(Session::new(Principal {
            user_id: session.user_id.clone().unwrap_or_default(),
            username: session.username.trim().to_string(),
            role,
        }))
    }

    /// Endpoint catalog with this file's overrides applied
    pub fn endpoint_catalog(&self) -> Result<EndpointCatalog> {
        let mut catalog = EndpointCatalog::new();
        let Some(endpoints) = &self.endpoints else {
            return Ok(catalog);
        };

        for (key, overrides) in endpoints {
            let module = HierarchyModule::from_str(key).map_err(anyhow::Error::msg)?;
            let defaults = ModuleEndpoints::default_for(module);
            catalog = catalog.with_override(
                module,
                ModuleEndpoints {
                    directory: overrides.directory.clone().unwrap_or(defaults.directory),
                    hierarchy: overrides.hierarchy.clone().unwrap_or(defaults.hierarchy),
                    status: overrides.status.clone().unwrap_or(defaults.status),
                },
            );
        }
        Ok(catalog)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref base_url) = config.base_url {
        let trimmed = base_url.trim();
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            bail!(
                "Invalid config: base_url '{}' must start with http:// or https://.\n\n\
                 💡 Hint: Use the backend root, e.g. \"https://backoffice.example.com/api\".",
                base_url
            );
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of 30 seconds."
        );
    }

    if let Some(ref name) = config.auth_token_env {
        if name.trim().is_empty() {
            bail!(
                "Invalid config: auth_token_env must not be empty.\n\n\
                 💡 Hint: Name the environment variable that holds the token (e.g., \"BACKOFFICE_TOKEN\")."
            );
        }
    }

    if let Some(ref module) = config.module {
        HierarchyModule::from_str(module)
            .map_err(|e| anyhow::anyhow!("Invalid config: module: {}", e))?;
    }

    if let Some(ref format) = config.format {
        OutputFormat::from_str(format)
            .map_err(|e| anyhow::anyhow!("Invalid config: format: {}", e))?;
    }

    if let Some(ref session) = config.session {
        if session.username.trim().is_empty() {
            bail!(
                "Invalid config: session.username must not be empty.\n\n\
                 💡 Hint: Remove the session block to run read-only."
            );
        }
        Role::from_str(&session.role)
            .map_err(|e| anyhow::anyhow!("Invalid config: session.role: {}", e))?;
    }

    if let Some(ref endpoints) = config.endpoints {
        for (key, overrides) in endpoints {
            HierarchyModule::from_str(key)
                .map_err(|e| anyhow::anyhow!("Invalid config: endpoints.{}: {}", key, e))?;
            for (name, path) in [
                ("directory", &overrides.directory),
                ("hierarchy", &overrides.hierarchy),
                ("status", &overrides.status),
            ] {
                if let Some(path) = path {
                    if !path.starts_with('/') {
                        bail!(
                            "Invalid config: endpoints.{}.{} must start with '/'.\n\n\
                             💡 Hint: Paths are relative to base_url (e.g., \"/jvm/approvers\").",
                            key,
                            name
                        );
                    }
                }
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
