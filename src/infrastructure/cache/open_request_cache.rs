use super::memory_cache::MemoryCacheService;
use crate::application::ports::cache::OpenRequestCache;
use crate::domain::entities::ChangeRequest;
use async_trait::async_trait;

/// In-memory implementation of the open change-request lookup cache.
/// Caches the lookup result itself, so "no open request" is a hit.
pub struct InMemoryOpenRequestCache {
    inner: MemoryCacheService<Option<ChangeRequest>>,
}

impl InMemoryOpenRequestCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            inner: MemoryCacheService::new(ttl_seconds),
        }
    }
}

#[async_trait]
impl OpenRequestCache for InMemoryOpenRequestCache {
    async fn get(&self, schedule_id: &str) -> Option<Option<ChangeRequest>> {
        self.inner.get(schedule_id).await
    }

    async fn set(&self, schedule_id: &str, request: Option<ChangeRequest>) {
        self.inner.set(schedule_id.to_string(), request).await;
    }

    async fn invalidate(&self, schedule_id: &str) {
        self.inner.delete(schedule_id).await;
    }
}
