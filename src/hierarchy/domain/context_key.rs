use super::HierarchyModule;
use crate::shared::error::HierarchyError;
use crate::shared::security::validate_identifier;
use crate::shared::Result;
use std::fmt;

/// Composite key identifying which hierarchy is being edited.
///
/// The shape depends on the module. Fields stay `None` while the user is
/// still selecting; a key is only used for backend calls once complete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContextKey {
    Company {
        company_id: Option<String>,
    },
    ImportScope {
        import_type_id: Option<String>,
        scope_id: Option<String>,
    },
    Requester {
        requester_id: Option<String>,
    },
    ChannelRegion {
        channel_id: Option<String>,
        region_id: Option<String>,
    },
}

impl ContextKey {
    /// Creates a key for the module with no fields selected
    pub fn empty(module: HierarchyModule) -> Self {
        match module {
            HierarchyModule::CustomDuty => ContextKey::Company { company_id: None },
            HierarchyModule::ImportPayment => ContextKey::ImportScope {
                import_type_id: None,
                scope_id: None,
            },
            HierarchyModule::Jvm => ContextKey::Requester { requester_id: None },
            HierarchyModule::CreditDeviation => ContextKey::ChannelRegion {
                channel_id: None,
                region_id: None,
            },
        }
    }

    /// Builds a key from `field=value` pairs.
    ///
    /// Field names are matched case-insensitively and ignore `_`/`-`, so
    /// `company_id`, `company-id` and `companyId` are equivalent. Later
    /// pairs override earlier ones.
    ///
    /// # Errors
    /// Returns an error if a field does not belong to the module or a value
    /// is not a safe identifier
    pub fn from_pairs<I, K, V>(module: HierarchyModule, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut key = Self::empty(module);
        for (field, value) in pairs {
            key.set_field(field.as_ref(), value.as_ref())?;
        }
        Ok(key)
    }

    /// Sets one field by name, validating the value
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let module = self.module();
        let canonical = module
            .context_fields()
            .iter()
            .find(|candidate| normalize_field_name(candidate) == normalize_field_name(field))
            .copied()
            .ok_or_else(|| HierarchyError::InvalidContextField {
                field: field.to_string(),
                reason: format!("not a context field of module '{}'", module),
                hint: format!(
                    "Valid fields for {}: {}",
                    module,
                    module.context_fields().join(", ")
                ),
            })?;

        let value = value.trim();
        validate_identifier(value, canonical).map_err(|e| HierarchyError::InvalidContextField {
            field: canonical.to_string(),
            reason: e.to_string(),
            hint: "Context values must be plain identifiers".to_string(),
        })?;

        if let Some(slot) = self.slot_mut(canonical) {
            *slot = Some(value.to_string());
        }
        Ok(())
    }

    pub fn module(&self) -> HierarchyModule {
        match self {
            ContextKey::Company { .. } => HierarchyModule::CustomDuty,
            ContextKey::ImportScope { .. } => HierarchyModule::ImportPayment,
            ContextKey::Requester { .. } => HierarchyModule::Jvm,
            ContextKey::ChannelRegion { .. } => HierarchyModule::CreditDeviation,
        }
    }

    /// All fields of the key in wire order, selected or not
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        match self {
            ContextKey::Company { company_id } => vec![("companyId", company_id.as_deref())],
            ContextKey::ImportScope {
                import_type_id,
                scope_id,
            } => vec![
                ("importTypeId", import_type_id.as_deref()),
                ("scopeId", scope_id.as_deref()),
            ],
            ContextKey::Requester { requester_id } => {
                vec![("requesterId", requester_id.as_deref())]
            }
            ContextKey::ChannelRegion {
                channel_id,
                region_id,
            } => vec![
                ("channelId", channel_id.as_deref()),
                ("regionId", region_id.as_deref()),
            ],
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Returns the `(field, value)` pairs of a complete key
    ///
    /// # Errors
    /// Returns `HierarchyError::IncompleteContext` naming the missing fields
    pub fn require_complete(&self) -> Result<Vec<(&'static str, &str)>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(HierarchyError::IncompleteContext {
                missing: missing.join(", "),
            }
            .into());
        }

        Ok(self
            .fields()
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect())
    }

    fn slot_mut(&mut self, canonical: &str) -> Option<&mut Option<String>> {
        match (self, canonical) {
            (ContextKey::Company { company_id }, "companyId") => Some(company_id),
            (ContextKey::ImportScope { import_type_id, .. }, "importTypeId") => {
                Some(import_type_id)
            }
            (ContextKey::ImportScope { scope_id, .. }, "scopeId") => Some(scope_id),
            (ContextKey::Requester { requester_id }, "requesterId") => Some(requester_id),
            (ContextKey::ChannelRegion { channel_id, .. }, "channelId") => Some(channel_id),
            (ContextKey::ChannelRegion { region_id, .. }, "regionId") => Some(region_id),
            _ => None,
        }
    }
}

fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .fields()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value.unwrap_or("<unset>")))
            .collect();
        write!(f, "{} [{}]", self.module(), rendered.join(", "))
    }
}
