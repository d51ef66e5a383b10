use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues `log-<millis>` and `draft-<millis>` identifiers.
///
/// The millisecond component never repeats within one generator: when the
/// clock has not moved since the last id it is bumped by one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_log_id(&self) -> String {
        format!("log-{}", self.next_millis())
    }

    pub fn next_draft_id(&self) -> String {
        format!("draft-{}", self.next_millis())
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last_millis.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self.last_millis.compare_exchange_weak(
                prev,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => prev = actual,
            }
        }
    }
}
