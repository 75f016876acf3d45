pub mod cache;
pub mod clock;
pub mod refresh_notifier;
pub mod repositories;
