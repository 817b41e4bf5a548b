use approval_hierarchy::prelude::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock HierarchyRepository keeping hierarchies in memory per context
///
/// Accepted saves and status changes are visible to the next fetch, so the
/// reload after a mutation sees the new state. Every call is recorded.
#[derive(Default, Clone)]
pub struct MockHierarchyRepository {
    pub hierarchies: Arc<Mutex<HashMap<ContextKey, HierarchySnapshot>>>,
    pub fetch_failure: Option<String>,
    pub rejection: Option<(u16, Option<String>)>,
    pub fetches: Arc<Mutex<Vec<ContextKey>>>,
    pub status_updates: Arc<Mutex<Vec<LevelStatusUpdate>>>,
    pub saves: Arc<Mutex<Vec<BulkUpdateRequest>>>,
}

impl MockHierarchyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hierarchy(self, context_key: ContextKey, snapshot: HierarchySnapshot) -> Self {
        self.hierarchies
            .lock()
            .unwrap()
            .insert(context_key, snapshot);
        self
    }

    pub fn with_fetch_failure(mut self, message: &str) -> Self {
        self.fetch_failure = Some(message.to_string());
        self
    }

    /// Makes every mutation fail with the given status and payload message
    pub fn rejecting(mut self, status: u16, message: Option<&str>) -> Self {
        self.rejection = Some((status, message.map(str::to_string)));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    pub fn recorded_status_updates(&self) -> Vec<LevelStatusUpdate> {
        self.status_updates.lock().unwrap().clone()
    }

    pub fn recorded_saves(&self) -> Vec<BulkUpdateRequest> {
        self.saves.lock().unwrap().clone()
    }

    pub fn stored(&self, context_key: &ContextKey) -> Option<HierarchySnapshot> {
        self.hierarchies.lock().unwrap().get(context_key).cloned()
    }

    fn check_rejection(&self) -> Result<()> {
        match &self.rejection {
            Some((status, message)) => Err(HierarchyError::Backend {
                status: *status,
                message: message.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HierarchyRepository for MockHierarchyRepository {
    async fn fetch_hierarchy(&self, context_key: &ContextKey) -> Result<Option<HierarchySnapshot>> {
        self.fetches.lock().unwrap().push(context_key.clone());
        if let Some(message) = &self.fetch_failure {
            anyhow::bail!("{}", message);
        }
        Ok(self.stored(context_key))
    }

    async fn update_level_status(&self, update: &LevelStatusUpdate) -> Result<()> {
        self.status_updates.lock().unwrap().push(update.clone());
        self.check_rejection()?;

        let mut hierarchies = self.hierarchies.lock().unwrap();
        let snapshot = hierarchies
            .values_mut()
            .find(|snapshot| snapshot.approval_type_id == update.approval_type_id)
            .ok_or_else(|| HierarchyError::Backend {
                status: 404,
                message: Some("Approval type not found".to_string()),
            })?;

        let level = i64::from(update.level);
        match snapshot.steps.iter_mut().find(|step| step.level == level) {
            Some(step) => step.active = update.status,
            None => snapshot
                .steps
                .push(PersistedStep::new(level, vec![], update.status)),
        }
        Ok(())
    }

    async fn save_hierarchy(&self, request: &BulkUpdateRequest) -> Result<()> {
        self.saves.lock().unwrap().push(request.clone());
        self.check_rejection()?;

        let context_key = ContextKey::from_pairs(request.module, request.context.iter())?;
        let mut hierarchies = self.hierarchies.lock().unwrap();
        let approval_type_id = request
            .approval_type_id
            .clone()
            .unwrap_or_else(|| format!("at-{}", hierarchies.len() + 1));

        let steps = request
            .steps
            .iter()
            .map(|step| {
                let ids = match (&step.approver_ids, &step.approver_id) {
                    (Some(ids), _) => ids.clone(),
                    (None, Some(id)) => vec![id.clone()],
                    (None, None) => vec![],
                };
                PersistedStep::new(
                    i64::from(step.level),
                    ids.into_iter().map(ApproverId::new).collect(),
                    step.status,
                )
                .with_backing_id(format!("{}-step-{}", approval_type_id, step.level))
            })
            .collect();

        hierarchies.insert(
            context_key,
            HierarchySnapshot {
                approval_type_id,
                steps,
                unreadable_levels: Vec::new(),
            },
        );
        Ok(())
    }
}
