use serde::{Deserialize, Serialize};

use crate::config::tokens::seed_alpha_tokens;
use crate::models::token::Token;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;
const TWENTY_HOURS_MS: u64 = 20 * 60 * 60 * 1000;

// Presentational countdown state for a token promotion window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineEntry {
    pub token: Token,
    pub deadline_ms: u64,
    pub is_active: bool,
}

impl DeadlineEntry {
    pub fn new(token: Token, deadline_ms: u64, now_ms: u64) -> Self {
        DeadlineEntry {
            token,
            deadline_ms,
            is_active: now_ms < deadline_ms,
        }
    }
}

pub fn refresh_deadlines(entries: &mut [DeadlineEntry], now_ms: u64) {
    for entry in entries.iter_mut() {
        entry.is_active = now_ms < entry.deadline_ms;
    }
}

// One window still open for a day, one that closed twenty hours ago.
pub fn seed_deadlines(now_ms: u64) -> Vec<DeadlineEntry> {
    let deadlines = [now_ms + DAY_MS, now_ms.saturating_sub(TWENTY_HOURS_MS)];

    seed_alpha_tokens()
        .into_iter()
        .zip(deadlines)
        .map(|(token, deadline_ms)| DeadlineEntry::new(token, deadline_ms, now_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tokens::common_tokens;

    fn entry(deadline_ms: u64, now_ms: u64) -> DeadlineEntry {
        let token = common_tokens()[0].clone();
        DeadlineEntry::new(token, deadline_ms, now_ms)
    }

    #[test]
    fn active_only_strictly_before_the_deadline() {
        assert!(entry(100, 99).is_active);
        assert!(!entry(100, 100).is_active);
        assert!(!entry(100, 101).is_active);
    }

    #[test]
    fn refresh_flips_both_ways() {
        // first starts open, second starts already closed
        let mut entries = vec![entry(100, 0), entry(500, 600)];
        assert!(entries[0].is_active);
        assert!(!entries[1].is_active);

        refresh_deadlines(&mut entries, 200);

        assert!(!entries[0].is_active);
        assert!(entries[1].is_active);
    }

    #[test]
    fn seeded_windows_start_one_open_one_expired() {
        let now = 1_000_000_000_000;
        let seeded = seed_deadlines(now);

        assert_eq!(seeded.len(), 2);
        assert!(seeded[0].is_active);
        assert_eq!(seeded[0].deadline_ms, now + DAY_MS);
        assert!(!seeded[1].is_active);
        assert_eq!(seeded[1].deadline_ms, now - TWENTY_HOURS_MS);
    }
}
