//! Per-policy run statistics.

use std::fmt;

use crate::policy::AccessOutcome;

/// Counters collected while feeding one trace to one policy.
///
/// # Example
/// ```
/// use pagesim::policy::AccessOutcome;
/// use pagesim::PolicyStats;
///
/// let mut stats = PolicyStats::default();
/// stats.record(AccessOutcome::Fault { evicted: None });
/// stats.record(AccessOutcome::Hit);
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PolicyStats {
    /// Accesses processed.
    pub accesses: u64,

    /// Accesses whose page was already resident.
    pub hits: u64,

    /// Page faults (misses).
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl PolicyStats {
    /// Account for one access outcome.
    pub fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for PolicyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
