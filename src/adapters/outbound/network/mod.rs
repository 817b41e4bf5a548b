/// Network adapters for the back-office REST backend
mod caching_directory;
mod endpoints;
mod rest_client;

pub use caching_directory::CachingApproverDirectory;
pub use endpoints::{EndpointCatalog, ModuleEndpoints};
pub use rest_client::{RestClientConfig, RestHierarchyClient, DEFAULT_TIMEOUT_SECS};
