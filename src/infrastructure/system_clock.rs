use crate::application::ports::clock::Clock;
use chrono::NaiveDate;

/// Process-local calendar date. The cutoff is date-only by design; no
/// timezone normalization beyond the host's local zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
