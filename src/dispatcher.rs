//! Work admission and the completion-detecting result collector.
//!
//! There is no central queue length to watch: workers (probes) are
//! themselves producers of new work. The in-flight counter tracks
//! admitted-minus-completed and is the only thing the collector needs to
//! detect quiescence -- once it hits zero, no task that could still admit
//! new work is running, because admission only ever happens strictly
//! before a probe sends its own result.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::context::RunContext;
use crate::probe;
use crate::work::{CheckResult, Stats, Work};

#[derive(Debug, Default)]
pub struct Counter(AtomicI64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicI64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    /// Decrements and returns the post-decrement value.
    pub fn dec(&self) -> i64 {
        self.0.fetch_sub(1, Ordering::AcqRel) - 1
    }

    pub fn load(&self) -> i64 {
        self.0.load(Ordering::Acquire)
    }
}

pub type ResultSender = mpsc::UnboundedSender<CheckResult>;

/// Admits `work` if its URL has never been admitted before: registers it
/// in the Visited Set, bumps the in-flight counter, and spawns exactly
/// one probe task for it. Dropped silently if already admitted.
///
/// Must stay non-blocking -- the rate gate is acquired *inside* the
/// spawned task, never here, or discovery would serialize with rate
/// limiting and quiescence could be mis-detected.
pub fn admit(ctx: &Arc<RunContext>, counter: &Arc<Counter>, tx: &ResultSender, work: Work) {
    if !ctx.visited.admit(&work.url) {
        return;
    }
    counter.inc();

    let ctx = Arc::clone(ctx);
    let counter = Arc::clone(counter);
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = probe::probe(work, &ctx, &counter, &tx).await;
        // The channel only closes after every sender (one per in-flight
        // probe, plus the one held by the collector loop) is dropped, so
        // this send cannot fail while the collector is still running.
        let _ = tx.send(result);
    });
}

/// Runs the dispatcher + collector for one crawl: admits every seed,
/// then drains results until the in-flight counter returns to zero.
pub async fn run(ctx: Arc<RunContext>, seeds: Vec<Work>) -> (Vec<CheckResult>, Vec<CheckResult>, Stats) {
    let (tx, mut rx) = mpsc::unbounded_channel::<CheckResult>();
    let counter = Arc::new(Counter::new());

    for seed in seeds {
        admit(&ctx, &counter, &tx, seed);
    }
    // Drop our half; spawned probe tasks hold their own clones. If every
    // seed was a duplicate (or there were none), the channel is already
    // orphaned and `recv` below returns `None` immediately instead of
    // hanging forever.
    drop(tx);

    let mut log = Vec::new();
    let mut stats = Stats::default();

    if counter.load() == 0 {
        return (Vec::new(), Vec::new(), stats);
    }

    while let Some(result) = rx.recv().await {
        stats.total += 1;
        if result.is_success() {
            stats.successes += 1;
        } else {
            stats.failures += 1;
        }
        ctx.stdout
            .write_line(&format!("{} is {} ({})", result.url, result.state, result.response_code));
        log.push(result);

        if counter.dec() == 0 {
            break;
        }
    }

    let (successes, failures): (Vec<_>, Vec<_>) = log.into_iter().partition(CheckResult::is_success);
    (failures, successes, stats)
}
