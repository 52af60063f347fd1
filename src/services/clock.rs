use chrono::{DateTime, Utc};

/// Time source for the pipeline. Injected so tests can pin "now" and get
/// deterministic window filtering and missing-date stamping.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
