use std::sync::Arc;

use crate::application::services::{ApprovalService, RosterService, ScheduleResponseService};
use crate::infrastructure::SystemClock;
use crate::infrastructure::cache::InMemoryOpenRequestCache;
use crate::infrastructure::database::{ConnectionPool, Repository, SqliteRepository};
use crate::infrastructure::notify::ChannelRefreshNotifier;
use crate::shared::AppConfig;

/// アプリケーション全体の状態を管理する構造体
#[derive(Clone)]
pub struct AppState {
    pub response_service: Arc<ScheduleResponseService>,
    pub approval_service: Arc<ApprovalService>,
    pub roster_service: Arc<RosterService>,
    pub repository: Arc<SqliteRepository>,
    pub refresh_notifier: Arc<ChannelRefreshNotifier>,
    pub pool: ConnectionPool,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let pool =
            ConnectionPool::new(&config.database.url, config.database.max_connections).await?;
        let repository = Arc::new(SqliteRepository::new(pool.clone()));
        repository
            .initialize()
            .await
            .map_err(|e| anyhow::anyhow!("failed to initialize repository: {e}"))?;
        if !repository
            .health_check()
            .await
            .map_err(|e| anyhow::anyhow!("repository health check failed: {e}"))?
        {
            anyhow::bail!("repository health check failed");
        }

        let cache = Arc::new(InMemoryOpenRequestCache::new(config.cache.open_request_ttl));
        let refresh_notifier = Arc::new(ChannelRefreshNotifier::default());
        let clock = Arc::new(SystemClock);

        let response_service = Arc::new(ScheduleResponseService::new(
            repository.clone(),
            repository.clone(),
            cache.clone(),
            refresh_notifier.clone(),
            clock,
        ));
        let approval_service = Arc::new(ApprovalService::new(
            repository.clone(),
            cache,
            refresh_notifier.clone(),
        ));
        let roster_service = Arc::new(RosterService::new(repository.clone(), repository.clone()));

        Ok(Self {
            response_service,
            approval_service,
            roster_service,
            repository,
            refresh_notifier,
            pool,
        })
    }
}
