//! Simulation driver.
//!
//! Runs all four policies against one trace with the same frame capacity
//! and collects their fault counts.
//!
//! # Components
//! - [`Simulation`] - Builds and runs the policies for a [`SimConfig`]
//! - [`FaultCounts`] - The four results, in reporting order
//! - [`PolicyStats`] - Detailed counters for a single policy run
//! - [`batch`] - Many traces at once, failures isolated per trace

pub mod batch;
mod stats;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::thread;

use tracing::debug;

use crate::common::config::{check_frames_and_threshold, DEFAULT_SEED};
use crate::common::{Result, SimConfig};
use crate::policy::{Clock, Nru, Optimal, PolicyKind, ReplacementPolicy, WsClock};
use crate::trace::{AccessRecord, Trace};

pub use stats::PolicyStats;

/// Feed every access to `policy` and count what happened.
pub fn simulate<P>(policy: &mut P, accesses: &[AccessRecord]) -> PolicyStats
where
    P: ReplacementPolicy + ?Sized,
{
    let mut stats = PolicyStats::default();
    for access in accesses {
        stats.record(policy.on_access(access));
    }
    stats
}

/// Fault counts of the four policies for one trace.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaultCounts {
    pub optimal: u64,
    pub nru: u64,
    pub clock: u64,
    pub wsclock: u64,
}

impl FaultCounts {
    /// Fault count for one policy.
    pub fn get(&self, kind: PolicyKind) -> u64 {
        match kind {
            PolicyKind::Optimal => self.optimal,
            PolicyKind::Nru => self.nru,
            PolicyKind::Clock => self.clock,
            PolicyKind::WsClock => self.wsclock,
        }
    }

    fn set(&mut self, kind: PolicyKind, faults: u64) {
        match kind {
            PolicyKind::Optimal => self.optimal = faults,
            PolicyKind::Nru => self.nru = faults,
            PolicyKind::Clock => self.clock = faults,
            PolicyKind::WsClock => self.wsclock = faults,
        }
    }

    /// Counts in reporting order: Optimal, NRU, Clock, WSClock.
    pub fn to_array(&self) -> [u64; 4] {
        PolicyKind::ALL.map(|kind| self.get(kind))
    }

    /// Write the four counts, one per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    /// Write the result file for a trace.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }
}

impl fmt::Display for FaultCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for faults in self.to_array() {
            writeln!(f, "{}", faults)?;
        }
        Ok(())
    }
}

/// Runs the four policies for one set of parameters.
///
/// # Usage
/// ```
/// use pagesim::{AccessRecord, SimConfig, Simulation};
///
/// let accesses = vec![
///     AccessRecord::read(1, 1),
///     AccessRecord::read(2, 2),
///     AccessRecord::read(3, 3),
///     AccessRecord::read(1, 4),
/// ];
/// let sim = Simulation::new(SimConfig::new(4, 2, 1).unwrap());
/// let counts = sim.run(&accesses);
/// assert_eq!(counts.optimal, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    config: SimConfig,
    seed: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            seed: DEFAULT_SEED,
        }
    }

    /// Seed NRU's random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Build a fresh policy instance for `accesses`.
    pub fn build(
        &self,
        kind: PolicyKind,
        accesses: &[AccessRecord],
    ) -> Box<dyn ReplacementPolicy + Send> {
        let m = self.config.frame_capacity;
        match kind {
            PolicyKind::Optimal => Box::new(Optimal::new(m, accesses)),
            PolicyKind::Nru => Box::new(Nru::seeded(m, self.config.total_pages, self.seed)),
            PolicyKind::Clock => Box::new(Clock::new(m)),
            PolicyKind::WsClock => Box::new(WsClock::new(m, self.config.ws_threshold)),
        }
    }

    /// Run a single policy over the trace.
    pub fn run_policy(&self, kind: PolicyKind, accesses: &[AccessRecord]) -> PolicyStats {
        let mut policy = self.build(kind, accesses);
        let stats = simulate(policy.as_mut(), accesses);
        debug!(
            policy = %kind,
            frames = self.config.frame_capacity,
            %stats,
            "policy finished"
        );
        stats
    }

    /// Run all four policies one after another.
    pub fn run(&self, accesses: &[AccessRecord]) -> FaultCounts {
        let mut counts = FaultCounts::default();
        for kind in PolicyKind::ALL {
            counts.set(kind, self.run_policy(kind, accesses).faults);
        }
        counts
    }

    /// Run all four policies on their own threads.
    ///
    /// Gives the same counts as [`run`](Self::run); each policy owns its
    /// state and only reads the shared trace.
    pub fn run_parallel(&self, accesses: &[AccessRecord]) -> FaultCounts {
        let results: Vec<(PolicyKind, PolicyStats)> = thread::scope(|s| {
            let handles: Vec<_> = PolicyKind::ALL
                .into_iter()
                .map(|kind| s.spawn(move || (kind, self.run_policy(kind, accesses))))
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut counts = FaultCounts::default();
        for (kind, stats) in results {
            counts.set(kind, stats.faults);
        }
        counts
    }
}

/// Validate a trace's header and run all four policies on it.
pub fn run_trace(trace: &Trace, seed: u64) -> Result<FaultCounts> {
    if trace.is_empty() {
        check_frames_and_threshold(trace.header.frames, trace.header.ws_threshold)?;
        debug!("empty trace");
        return Ok(FaultCounts::default());
    }

    let config = trace.config()?;
    debug!(
        accesses = trace.len(),
        pages = config.total_pages,
        frames = config.frame_capacity,
        threshold = config.ws_threshold,
        "running trace"
    );
    Ok(Simulation::new(config).with_seed(seed).run(&trace.accesses))
}
