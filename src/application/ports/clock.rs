use chrono::NaiveDate;

/// Calendar-date source for the past-date cutoff. Injected so tests control
/// "today"; the cutoff compares plain calendar dates, no time component.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
