//! Batch driver.
//!
//! Runs many independent traces across a small pool of worker threads.
//! Each trace yields its own `Result`; a malformed file or bad header is
//! logged and reported in its slot without stopping the rest of the batch.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::common::config::{DEFAULT_SEED, DEFAULT_WORKERS};
use crate::common::Result;
use crate::sim::{run_trace, FaultCounts};
use crate::trace::Trace;

/// Options for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Worker threads (at least one is always used).
    pub workers: usize,

    /// Seed for every trace's NRU random source.
    pub seed: u64,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Run every trace; results come back in input order.
pub fn run_batch(traces: &[Trace], options: BatchOptions) -> Vec<Result<FaultCounts>> {
    run_jobs(traces, options.workers, |trace| run_trace(trace, options.seed))
}

/// Load and run every trace file; results come back in input order.
pub fn run_files<P>(paths: &[P], options: BatchOptions) -> Vec<Result<FaultCounts>>
where
    P: AsRef<Path> + Sync,
{
    run_jobs(paths, options.workers, |path| {
        let trace = Trace::open(path)?;
        run_trace(&trace, options.seed)
    })
}

/// Hand out `items` to workers through a shared cursor.
fn run_jobs<T, F>(items: &[T], workers: usize, job: F) -> Vec<Result<FaultCounts>>
where
    T: Sync,
    F: Fn(&T) -> Result<FaultCounts> + Sync,
{
    let total = items.len();
    let workers = workers.clamp(1, total.max(1));
    let slots: Mutex<Vec<Option<Result<FaultCounts>>>> =
        Mutex::new((0..total).map(|_| None).collect());
    let cursor = AtomicUsize::new(0);

    debug!(total, workers, "starting batch");

    thread::scope(|s| {
        for _ in 0..workers {
            s.spawn(|| loop {
                let index = cursor.fetch_add(1, Ordering::Relaxed);
                if index >= total {
                    break;
                }

                let result = job(&items[index]);
                if let Err(err) = &result {
                    warn!(index, error = %err, "trace failed");
                }
                slots.lock()[index] = Some(result);
            });
        }
    });

    // Scoped threads have all joined; every slot is filled.
    let results: Vec<_> = slots.into_inner().into_iter().flatten().collect();
    debug_assert_eq!(results.len(), total);
    results
}
