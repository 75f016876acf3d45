use crate::application::ports::refresh_notifier::RefreshNotifier;
use crate::shared::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event emitted after an acknowledged mutation. Subscribers re-fetch the
/// projected status of the named schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleChanged {
    pub schedule_id: String,
}

/// Broadcast-channel notifier: the presentation layer subscribes and reloads
/// on receipt instead of polling on a timer.
pub struct ChannelRefreshNotifier {
    sender: broadcast::Sender<ScheduleChanged>,
}

impl ChannelRefreshNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ScheduleChanged> {
        self.sender.subscribe()
    }
}

impl Default for ChannelRefreshNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[async_trait]
impl RefreshNotifier for ChannelRefreshNotifier {
    async fn schedule_changed(&self, schedule_id: &str) -> Result<(), AppError> {
        // A send error only means nobody is subscribed right now.
        let _ = self.sender.send(ScheduleChanged {
            schedule_id: schedule_id.to_string(),
        });
        Ok(())
    }
}
