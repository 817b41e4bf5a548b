use crate::hierarchy::domain::{ApproverRef, ContextKey};
use crate::ports::outbound::ApproverDirectory;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingApproverDirectory wraps an ApproverDirectory with an in-memory cache.
///
/// Listings are cached per context key for the lifetime of the process, so
/// switching back to a context does not refetch its directory. Failures are
/// not cached; the next load tries again.
pub struct CachingApproverDirectory<D: ApproverDirectory> {
    inner: D,
    cache: Arc<DashMap<ContextKey, Vec<ApproverRef>>>,
}

impl<D: ApproverDirectory> CachingApproverDirectory<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<D: ApproverDirectory> ApproverDirectory for CachingApproverDirectory<D> {
    async fn fetch_approvers(&self, context_key: &ContextKey) -> Result<Vec<ApproverRef>> {
        if let Some(cached) = self.cache.get(context_key) {
            return Ok(cached.clone());
        }

        let approvers = self.inner.fetch_approvers(context_key).await?;
        self.cache.insert(context_key.clone(), approvers.clone());

        Ok(approvers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::domain::{ApproverId, HierarchyModule};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Directory that counts calls and can be switched to failing
    struct CountingDirectory {
        call_count: AtomicUsize,
        failing: AtomicBool,
    }

    impl CountingDirectory {
        fn new() -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ApproverDirectory for CountingDirectory {
        async fn fetch_approvers(&self, context_key: &ContextKey) -> Result<Vec<ApproverRef>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                anyhow::bail!("directory unavailable");
            }
            let owner = context_key.fields()[0].1.unwrap_or("none").to_string();
            Ok(vec![ApproverRef::new(ApproverId::new(owner.clone()), owner, None)])
        }
    }

    fn company(id: &str) -> ContextKey {
        ContextKey::from_pairs(HierarchyModule::CustomDuty, [("companyId", id)]).unwrap()
    }

    #[tokio::test]
    async fn test_repeated_context_is_served_from_cache() {
        let directory = CachingApproverDirectory::new(CountingDirectory::new());

        let first = directory.fetch_approvers(&company("C1")).await.unwrap();
        let second = directory.fetch_approvers(&company("C1")).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(directory.inner.calls(), 1);
        assert_eq!(directory.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_contexts_are_cached_separately() {
        let directory = CachingApproverDirectory::new(CountingDirectory::new());

        let c1 = directory.fetch_approvers(&company("C1")).await.unwrap();
        let c2 = directory.fetch_approvers(&company("C2")).await.unwrap();

        assert_eq!(c1[0].display_name(), "C1");
        assert_eq!(c2[0].display_name(), "C2");
        assert_eq!(directory.inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let directory = CachingApproverDirectory::new(CountingDirectory::new());
        directory.inner.failing.store(true, Ordering::SeqCst);

        assert!(directory.fetch_approvers(&company("C1")).await.is_err());
        assert_eq!(directory.cache_size(), 0);

        directory.inner.failing.store(false, Ordering::SeqCst);
        assert!(directory.fetch_approvers(&company("C1")).await.is_ok());
        assert_eq!(directory.inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_switching_back_reuses_cached_listing() {
        let directory = CachingApproverDirectory::new(CountingDirectory::new());

        directory.fetch_approvers(&company("C1")).await.unwrap();
        directory.fetch_approvers(&company("C2")).await.unwrap();
        let again = directory.fetch_approvers(&company("C1")).await.unwrap();

        assert_eq!(again[0].display_name(), "C1");
        assert_eq!(directory.inner.calls(), 2);
        assert_eq!(directory.cache_size(), 2);
    }
}
