mod channel_refresh_notifier;

pub use channel_refresh_notifier::{ChannelRefreshNotifier, ScheduleChanged};
