pub mod cache;
pub mod database;
pub mod notify;
pub mod system_clock;

pub use system_clock::SystemClock;
