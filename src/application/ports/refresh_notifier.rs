use crate::shared::AppError;
use async_trait::async_trait;

/// Refresh channel toward the presentation layer: fired after every
/// acknowledged mutation so the caller re-fetches the projected status
/// instead of relying on a timer. Never fired on a failed mutation.
#[async_trait]
pub trait RefreshNotifier: Send + Sync {
    async fn schedule_changed(&self, schedule_id: &str) -> Result<(), AppError>;
}
