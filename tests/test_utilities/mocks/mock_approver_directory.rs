use approval_hierarchy::prelude::*;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock ApproverDirectory returning a fixed listing and recording lookups
#[derive(Default, Clone)]
pub struct MockApproverDirectory {
    pub approvers: Vec<ApproverRef>,
    pub failure: Option<String>,
    pub lookups: Arc<Mutex<Vec<ContextKey>>>,
}

impl MockApproverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_approver(mut self, id: &str, username: &str, email: Option<&str>) -> Self {
        self.approvers.push(ApproverRef::new(
            ApproverId::new(id),
            username,
            email.map(str::to_string),
        ));
        self
    }

    pub fn with_failure(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl ApproverDirectory for MockApproverDirectory {
    async fn fetch_approvers(&self, context_key: &ContextKey) -> Result<Vec<ApproverRef>> {
        self.lookups.lock().unwrap().push(context_key.clone());
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.approvers.clone())
    }
}
