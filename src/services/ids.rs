use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Hands out event ids derived from the wall clock in nanoseconds.
///
/// Ids are strictly increasing within one generator: when the clock has not
/// moved past the last issued value, the next id is `last + 1`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        self.next_value().to_string()
    }

    fn next_value(&self) -> u64 {
        let now = now_nanos();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}

fn now_nanos() -> u64 {
    // Out of range only past the year 2262.
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or(0)
}
