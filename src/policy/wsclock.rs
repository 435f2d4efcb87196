//! WSClock (working-set clock) replacement policy.

use tracing::trace;

use crate::common::PageId;
use crate::policy::{AccessOutcome, Frame, PolicyKind, ReplacementPolicy};
use crate::trace::AccessRecord;

/// Clock variant that only evicts pages outside the working set.
///
/// A frame is evictable when it is unreferenced AND at least `threshold`
/// time units have passed since its last use. With `threshold == 0` this
/// behaves exactly like [`Clock`](crate::policy::Clock).
///
/// If two full sweeps find nothing evictable (every reference bit is clear
/// after the first, so no frame is old enough), the frame with the oldest
/// last use is evicted instead.
#[derive(Debug, Clone)]
pub struct WsClock {
    capacity: usize,
    threshold: i64,
    frames: Vec<Frame>,
    hand: usize,
}

impl WsClock {
    /// Create an empty WSClock.
    ///
    /// # Panics
    /// Panics if `capacity` is 0 or `threshold` is negative.
    pub fn new(capacity: usize, threshold: i64) -> Self {
        assert!(capacity > 0, "wsclock needs at least one frame");
        assert!(threshold >= 0, "wsclock threshold must not be negative");
        Self {
            capacity,
            threshold,
            frames: Vec::new(),
            hand: 0,
        }
    }

    pub fn hand(&self) -> usize {
        self.hand
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.capacity;
    }

    #[inline]
    fn is_evictable(&self, frame: &Frame, now: i64) -> bool {
        !frame.referenced && frame.age(now).map_or(true, |age| age >= self.threshold)
    }

    fn replace(&mut self, page: PageId, now: i64) -> PageId {
        for _ in 0..self.capacity.saturating_mul(2) {
            if self.is_evictable(&self.frames[self.hand], now) {
                return self.load_at_hand(page, now);
            }
            self.frames[self.hand].referenced = false;
            self.advance();
        }

        // Nothing left the working set; take the least recently used frame.
        if let Some((oldest, _)) = self
            .frames
            .iter()
            .enumerate()
            .min_by_key(|(_, f)| f.last_used)
        {
            self.hand = oldest;
        }
        trace!(slot = self.hand, "wsclock fallback to oldest frame");
        self.load_at_hand(page, now)
    }

    fn load_at_hand(&mut self, page: PageId, now: i64) -> PageId {
        let slot = &mut self.frames[self.hand];
        let victim = slot.page;
        *slot = Frame::loaded_at(page, now);
        victim
    }
}

impl ReplacementPolicy for WsClock {
    fn kind(&self) -> PolicyKind {
        PolicyKind::WsClock
    }

    fn on_access(&mut self, access: &AccessRecord) -> AccessOutcome {
        if let Some(frame) = self.frames.iter_mut().find(|f| f.page == access.page) {
            frame.referenced = true;
            frame.last_used = Some(access.time);
            if access.is_write {
                frame.modified = true;
            }
            return AccessOutcome::Hit;
        }

        let evicted = if self.frames.len() < self.capacity {
            self.frames.push(Frame::loaded_at(access.page, access.time));
            None
        } else {
            let victim = self.replace(access.page, access.time);
            trace!(%victim, page = %access.page, slot = self.hand, "wsclock evict");
            Some(victim)
        };
        self.advance();

        AccessOutcome::Fault { evicted }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_len(&self) -> usize {
        self.frames.len()
    }

    fn is_resident(&self, page: PageId) -> bool {
        self.frames.iter().any(|f| f.page == page)
    }
}
