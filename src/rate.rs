//! One permit per tick, no burst accumulation.
//!
//! A pure `tokio::time::interval` per caller would let every caller
//! start at once on the first tick. Routing every caller's tick through
//! one shared `Mutex<Interval>` means only one waiter can be mid-`.tick()`
//! at a time, so callers race fairly for each permit as it's produced.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{interval, Interval, MissedTickBehavior};

pub struct Gate {
    ticker: Mutex<Interval>,
}

impl Gate {
    pub fn new(period: Duration) -> Self {
        let mut ticker = interval(period);
        // A burst of missed ticks (e.g. after a slow probe) should not
        // let a waiter fire back-to-back permits; skip to the next
        // scheduled tick instead.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            ticker: Mutex::new(ticker),
        }
    }

    /// Blocks until a new permit is available. Must be called from
    /// inside the spawned probe task, never on the admission path, or
    /// discovery would serialize with rate limiting.
    pub async fn acquire(&self) {
        let mut ticker = self.ticker.lock().await;
        ticker.tick().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    #[tokio::test]
    async fn serializes_concurrent_waiters_to_the_tick_period() {
        let gate = Arc::new(Gate::new(Duration::from_millis(20)));
        let start = Instant::now();

        let mut handles = Vec::new();
        for _ in 0..3 {
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                gate.acquire().await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        // Three permits at >= ~20ms apart can't all land before ~40ms.
        assert!(start.elapsed() >= Duration::from_millis(35));
    }
}
