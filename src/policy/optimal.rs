//! Optimal (Belady) replacement policy.
//!
//! On a miss with a full set, evicts the resident page whose next use lies
//! farthest in the future. A page that is never used again is treated as
//! used at infinity. Needs the whole trace up front, so it is only useful
//! as an offline lower bound for the other policies.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::common::PageId;
use crate::policy::{AccessOutcome, PolicyKind, ReplacementPolicy};
use crate::trace::AccessRecord;

/// Marker for "not used again".
const NEVER: usize = usize::MAX;

/// For each index `i`, the next index `j > i` accessing the same page, or
/// [`NEVER`].
///
/// One backward pass, so a miss no longer has to rescan the suffix of the
/// trace.
fn next_occurrences(accesses: &[AccessRecord]) -> Vec<usize> {
    let mut next = vec![NEVER; accesses.len()];
    let mut seen: HashMap<PageId, usize> = HashMap::new();

    for (i, access) in accesses.iter().enumerate().rev() {
        next[i] = seen.insert(access.page, i).unwrap_or(NEVER);
    }
    next
}

/// Belady's optimal replacement.
///
/// Must be fed exactly the accesses it was built from, in order. Resident
/// pages are kept in ascending page order with the index of their next
/// use; when several pages are never used again the lowest page id goes.
#[derive(Debug, Clone)]
pub struct Optimal {
    capacity: usize,
    next_use: Vec<usize>,
    cursor: usize,
    resident: BTreeMap<PageId, usize>,
}

impl Optimal {
    /// Build the policy for `accesses`.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize, accesses: &[AccessRecord]) -> Self {
        assert!(capacity > 0, "optimal needs at least one frame");
        Self {
            capacity,
            next_use: next_occurrences(accesses),
            cursor: 0,
            resident: BTreeMap::new(),
        }
    }

    /// Resident page whose next use is farthest away.
    fn select_victim(&self) -> Option<PageId> {
        let mut victim = None;
        let mut farthest = 0;
        for (&page, &next) in &self.resident {
            if victim.is_none() || next > farthest {
                victim = Some(page);
                farthest = next;
            }
        }
        victim
    }
}

impl ReplacementPolicy for Optimal {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn on_access(&mut self, access: &AccessRecord) -> AccessOutcome {
        let next = self.next_use.get(self.cursor).copied().unwrap_or(NEVER);
        self.cursor += 1;

        if let Some(slot) = self.resident.get_mut(&access.page) {
            *slot = next;
            return AccessOutcome::Hit;
        }

        let mut evicted = None;
        if self.resident.len() == self.capacity {
            if let Some(victim) = self.select_victim() {
                self.resident.remove(&victim);
                trace!(%victim, page = %access.page, "optimal evict");
                evicted = Some(victim);
            }
        }
        self.resident.insert(access.page, next);

        AccessOutcome::Fault { evicted }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_len(&self) -> usize {
        self.resident.len()
    }

    fn is_resident(&self, page: PageId) -> bool {
        self.resident.contains_key(&page)
    }
}
