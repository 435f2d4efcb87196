//! NRU (Not Recently Used) replacement policy.
//!
//! Resident pages are ranked by their (referenced, modified) bits:
//!
//! | class | R | M |
//! |-------|---|---|
//! | 0     | 0 | 0 |
//! | 1     | 0 | 1 |
//! | 2     | 1 | 0 |
//! | 3     | 1 | 1 |
//!
//! The victim is picked uniformly at random from the lowest non-empty
//! class. Referenced bits are cleared on every resident frame whenever an
//! access lands on a time that is a multiple of the aging period.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::common::config::DEFAULT_SEED;
use crate::common::PageId;
use crate::policy::{AccessOutcome, Frame, PolicyKind, ReplacementPolicy};
use crate::trace::AccessRecord;

/// Not Recently Used replacement with an injectable random source.
///
/// Frames are keyed by page in a `BTreeMap` so that, for a given seed, the
/// candidate order (and therefore the random pick) is reproducible.
#[derive(Debug, Clone)]
pub struct Nru<R = StdRng> {
    capacity: usize,
    period: i64,
    frames: BTreeMap<PageId, Frame>,
    rng: R,
}

impl Nru<StdRng> {
    /// Create an NRU policy using the default seed.
    pub fn new(capacity: usize, period: i64) -> Self {
        Self::seeded(capacity, period, DEFAULT_SEED)
    }

    /// Create an NRU policy whose random picks are driven by `seed`.
    pub fn seeded(capacity: usize, period: i64, seed: u64) -> Self {
        Self::with_rng(capacity, period, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Nru<R> {
    /// Create an NRU policy drawing victims from `rng`.
    ///
    /// # Panics
    /// Panics if `capacity` or `period` is 0.
    pub fn with_rng(capacity: usize, period: i64, rng: R) -> Self {
        assert!(capacity > 0, "NRU needs at least one frame");
        assert!(period != 0, "NRU aging period must be non-zero");
        Self {
            capacity,
            period,
            frames: BTreeMap::new(),
            rng,
        }
    }

    /// Resident frame for `page`, if any.
    pub fn frame(&self, page: PageId) -> Option<&Frame> {
        self.frames.get(&page)
    }

    /// Pick a victim from the lowest non-empty class.
    fn select_victim(&mut self) -> Option<PageId> {
        let lowest = self.frames.values().map(Frame::nru_class).min()?;
        let candidates: Vec<PageId> = self
            .frames
            .values()
            .filter(|f| f.nru_class() == lowest)
            .map(|f| f.page)
            .collect();
        candidates.choose(&mut self.rng).copied()
    }
}

impl<R: Rng> ReplacementPolicy for Nru<R> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Nru
    }

    fn on_access(&mut self, access: &AccessRecord) -> AccessOutcome {
        let hit = self.frames.contains_key(&access.page);
        let mut evicted = None;

        if !hit && self.frames.len() == self.capacity {
            if let Some(victim) = self.select_victim() {
                self.frames.remove(&victim);
                trace!(%victim, page = %access.page, "nru evict");
                evicted = Some(victim);
            }
        }

        let frame = self
            .frames
            .entry(access.page)
            .or_insert_with(|| Frame::new(access.page));
        frame.referenced = true;
        if access.is_write {
            frame.modified = true;
        }

        if access.time.wrapping_rem(self.period) == 0 {
            for frame in self.frames.values_mut() {
                frame.referenced = false;
            }
        }

        if hit {
            AccessOutcome::Hit
        } else {
            AccessOutcome::Fault { evicted }
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_len(&self) -> usize {
        self.frames.len()
    }

    fn is_resident(&self, page: PageId) -> bool {
        self.frames.contains_key(&page)
    }
}
