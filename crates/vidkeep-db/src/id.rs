use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out video identifiers.
///
/// Identifiers follow the wall clock in milliseconds but are strictly increasing, so two
/// videos created within the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        self.next_after(Utc::now().timestamp_millis())
    }

    fn next_after(&self, now_millis: i64) -> i64 {
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now_millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now_millis.max(previous + 1)
    }
}
