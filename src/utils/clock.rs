use std::time::{SystemTime, UNIX_EPOCH};

// Wall-clock source for freshness stamps. Injected so staleness rules can be
// checked against a controlled clock.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
