use super::EndpointCatalog;
use crate::hierarchy::domain::{
    ApproverId, ApproverRef, BulkUpdateRequest, ContextKey, HierarchySnapshot, LevelStatusUpdate,
    PersistedStep,
};
use crate::ports::outbound::{ApproverDirectory, HierarchyRepository};
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Ids arrive as strings from most backends and as numbers from a few
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Text(text) => text,
            WireId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    #[serde(default)]
    approvers: Vec<ApproverDto>,
}

#[derive(Debug, Deserialize)]
struct ApproverDto {
    id: WireId,
    username: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HierarchyResponse {
    #[serde(default)]
    approval_type_id: Option<WireId>,
    #[serde(default)]
    steps: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepDto {
    #[serde(default, alias = "_id")]
    id: Option<WireId>,
    level: WireId,
    #[serde(default)]
    approver_id: Option<WireId>,
    #[serde(default)]
    approver_ids: Option<Vec<WireId>>,
    #[serde(default = "default_status")]
    status: bool,
}

fn default_status() -> bool {
    true
}

impl StepDto {
    /// `None` when the level is neither a number nor a numeric string
    fn into_step(self) -> Option<PersistedStep> {
        let level = match self.level {
            WireId::Number(level) => level,
            WireId::Text(text) => text.trim().parse().ok()?,
        };
        let ids: Vec<String> = match (self.approver_ids, self.approver_id) {
            (Some(ids), _) => ids.into_iter().map(WireId::into_string).collect(),
            (None, Some(id)) => vec![id.into_string()],
            (None, None) => Vec::new(),
        };
        let approver_ids = ids
            .into_iter()
            .filter(|id| !id.trim().is_empty())
            .map(ApproverId::new)
            .collect();

        let step = PersistedStep::new(level, approver_ids, self.status);
        Some(match self.id {
            Some(id) => step.with_backing_id(id.into_string()),
            None => step,
        })
    }
}

/// Raw label of a step record's level, for reporting records that were skipped
fn level_label(raw: &serde_json::Value) -> String {
    match raw.get("level") {
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(serde_json::Value::Null) | None => "<missing>".to_string(),
        Some(other) => other.to_string(),
    }
}

impl HierarchyResponse {
    /// `None` when the backend has no grouping record for the context
    fn into_snapshot(self) -> Option<HierarchySnapshot> {
        let approval_type_id = self.approval_type_id?.into_string();

        let mut steps = Vec::with_capacity(self.steps.len());
        let mut unreadable_levels = Vec::new();
        for raw in self.steps {
            let step = serde_json::from_value::<StepDto>(raw.clone())
                .ok()
                .and_then(StepDto::into_step);
            match step {
                Some(step) => steps.push(step),
                None => unreadable_levels.push(level_label(&raw)),
            }
        }

        Some(HierarchySnapshot {
            approval_type_id,
            steps,
            unreadable_levels,
        })
    }
}

/// Settings for the REST client
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub bearer_token: Option<String>,
    pub endpoints: EndpointCatalog,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bearer_token: None,
            endpoints: EndpointCatalog::new(),
        }
    }
}

/// RestHierarchyClient adapter for the back-office hierarchy endpoints
///
/// Implements both `ApproverDirectory` and `HierarchyRepository` on top of
/// one async reqwest client. Paths come from the endpoint catalog; the
/// context key is sent as query parameters on reads and inline in the body
/// of bulk saves.
#[derive(Clone)]
pub struct RestHierarchyClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
    endpoints: EndpointCatalog,
}

impl RestHierarchyClient {
    /// Creates a client for the given settings
    ///
    /// # Errors
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be built
    pub fn new(config: RestClientConfig) -> Result<Self> {
        let base_url = Self::validate_base_url(&config.base_url)?;

        let user_agent = format!("approval-hierarchy/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            bearer_token: config.bearer_token,
            endpoints: config.endpoints,
        })
    }

    fn validate_base_url(base_url: &str) -> Result<String> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| HierarchyError::Validation {
            message: format!("Invalid base URL '{}': {}", base_url, e),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HierarchyError::Validation {
                message: format!(
                    "Invalid base URL '{}': only http and https are supported",
                    base_url
                ),
            }
            .into());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(HierarchyError::Validation {
                message: format!(
                    "Invalid base URL '{}': query strings and fragments are not allowed",
                    base_url
                ),
            }
            .into());
        }
        Ok(trimmed.to_string())
    }

    /// Joins base URL, path and an encoded query string
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turns a non-success response into `HierarchyError::Backend`
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(HierarchyError::Backend {
            status: status.as_u16(),
            message: extract_error_message(&body),
        }
        .into())
    }
}

/// Pulls a human-readable message out of an error payload
///
/// Looks at `message`, `error` and `detail`, including `{"error": {"message": ..}}`.
/// Non-JSON bodies and blank messages yield `None`.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    for key in ["message", "error", "detail"] {
        let message = match value.get(key) {
            Some(serde_json::Value::String(text)) => Some(text.as_str()),
            Some(serde_json::Value::Object(inner)) => {
                inner.get("message").and_then(|m| m.as_str())
            }
            _ => None,
        };
        if let Some(message) = message.map(str::trim).filter(|m| !m.is_empty()) {
            return Some(message.to_string());
        }
    }
    None
}

#[async_trait]
impl ApproverDirectory for RestHierarchyClient {
    async fn fetch_approvers(&self, context_key: &ContextKey) -> Result<Vec<ApproverRef>> {
        let query = context_key.require_complete()?;
        let endpoints = self.endpoints.for_module(context_key.module());
        let url = self.build_url(&endpoints.directory, &query);

        let response = self.authorize(self.client.get(&url)).send().await?;
        let response = Self::ensure_success(response).await?;
        let directory: DirectoryResponse = response.json().await?;

        Ok(directory
            .approvers
            .into_iter()
            .map(|dto| ApproverRef::new(ApproverId::new(dto.id.into_string()), dto.username, dto.email))
            .collect())
    }
}

#[async_trait]
impl HierarchyRepository for RestHierarchyClient {
    async fn fetch_hierarchy(&self, context_key: &ContextKey) -> Result<Option<HierarchySnapshot>> {
        let query = context_key.require_complete()?;
        let endpoints = self.endpoints.for_module(context_key.module());
        let url = self.build_url(&endpoints.hierarchy, &query);

        let response = self.authorize(self.client.get(&url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::ensure_success(response).await?;
        let hierarchy: HierarchyResponse = response.json().await?;

        Ok(hierarchy.into_snapshot())
    }

    async fn update_level_status(&self, update: &LevelStatusUpdate) -> Result<()> {
        let endpoints = self.endpoints.for_module(update.module);
        let url = self.build_url(&endpoints.status, &[]);

        let response = self
            .authorize(self.client.put(&url).json(update))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn save_hierarchy(&self, request: &BulkUpdateRequest) -> Result<()> {
        let endpoints = self.endpoints.for_module(request.module);
        let url = self.build_url(&endpoints.hierarchy, &[]);

        let builder = if request.is_create() {
            self.client.post(&url)
        } else {
            self.client.put(&url)
        };
        let response = self.authorize(builder.json(request)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
