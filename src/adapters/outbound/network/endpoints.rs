use crate::hierarchy::domain::HierarchyModule;
use std::collections::HashMap;

/// Backend paths used for one module, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEndpoints {
    /// `GET` eligible approvers
    pub directory: String,
    /// `GET` persisted hierarchy, `POST`/`PUT` bulk save
    pub hierarchy: String,
    /// `PUT` single level status
    pub status: String,
}

impl ModuleEndpoints {
    pub fn default_for(module: HierarchyModule) -> Self {
        let slug = module.slug();
        Self {
            directory: format!("/{}/approvers", slug),
            hierarchy: format!("/{}/hierarchy", slug),
            status: format!("/{}/hierarchy/status", slug),
        }
    }
}

/// Endpoint paths for every module, defaults unless overridden
#[derive(Debug, Clone, Default)]
pub struct EndpointCatalog {
    overrides: HashMap<HierarchyModule, ModuleEndpoints>,
}

impl EndpointCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, module: HierarchyModule, endpoints: ModuleEndpoints) -> Self {
        self.overrides.insert(module, endpoints);
        self
    }

    pub fn for_module(&self, module: HierarchyModule) -> ModuleEndpoints {
        self.overrides
            .get(&module)
            .cloned()
            .unwrap_or_else(|| ModuleEndpoints::default_for(module))
    }
}
