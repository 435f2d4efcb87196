//! Page replacement policies.
//!
//! Each policy owns its own resident set and implements
//! [`ReplacementPolicy`]. They share no state, so a trace can be fed to
//! all of them independently (and concurrently).
//!
//! Currently implements:
//! - [`Optimal`] - Belady's algorithm, the lower bound for the others
//! - [`Nru`] - Not Recently Used, random pick from the lowest class
//! - [`Clock`] - Second chance over a circular frame list
//! - [`WsClock`] - Clock with a working-set age threshold

mod clock;
mod frame;
mod nru;
mod optimal;
mod wsclock;

use std::fmt;

pub use clock::Clock;
pub use frame::Frame;
pub use nru::Nru;
pub use optimal::Optimal;
pub use wsclock::WsClock;

use crate::common::PageId;
use crate::trace::AccessRecord;

/// Result of feeding one access to a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident.
    Hit,
    /// The page had to be loaded, displacing `evicted` if the set was full.
    Fault { evicted: Option<PageId> },
}

impl AccessOutcome {
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, AccessOutcome::Fault { .. })
    }
}

/// A page replacement policy driven one access at a time.
pub trait ReplacementPolicy {
    /// Which algorithm this is.
    fn kind(&self) -> PolicyKind;

    /// Process the next access of the trace.
    fn on_access(&mut self, access: &AccessRecord) -> AccessOutcome;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of currently resident pages. Never exceeds [`capacity`].
    ///
    /// [`capacity`]: ReplacementPolicy::capacity
    fn resident_len(&self) -> usize;

    /// Whether `page` is currently resident.
    fn is_resident(&self, page: PageId) -> bool;
}

/// The four simulated algorithms, in result order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Optimal,
    Nru,
    Clock,
    WsClock,
}

impl PolicyKind {
    /// All policies in the order results are reported.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Optimal,
        PolicyKind::Nru,
        PolicyKind::Clock,
        PolicyKind::WsClock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Nru => "NRU",
            PolicyKind::Clock => "Clock",
            PolicyKind::WsClock => "WSClock",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
