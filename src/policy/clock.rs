//! CLOCK (second chance) replacement policy.

use tracing::trace;

use crate::common::PageId;
use crate::policy::{AccessOutcome, Frame, PolicyKind, ReplacementPolicy};
use crate::trace::AccessRecord;

/// Second-chance replacement over a circular frame list.
///
/// On a full miss the hand sweeps forward, clearing referenced bits, until
/// it reaches an unreferenced frame. The hand always moves one more slot
/// after a miss, whether or not anything was evicted.
#[derive(Debug, Clone)]
pub struct Clock {
    capacity: usize,
    frames: Vec<Frame>,
    hand: usize,
}

impl Clock {
    /// Create an empty clock with room for `capacity` pages.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "clock needs at least one frame");
        Self {
            capacity,
            frames: Vec::new(),
            hand: 0,
        }
    }

    /// Current hand position.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Resident frames in clock order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    fn advance(&mut self) {
        self.hand = (self.hand + 1) % self.capacity;
    }

    /// Sweep from the hand to the first unreferenced frame and replace it.
    fn replace(&mut self, page: PageId) -> PageId {
        loop {
            let frame = &mut self.frames[self.hand];
            if !frame.referenced {
                let victim = frame.page;
                *frame = Frame::new(page);
                return victim;
            }
            frame.referenced = false;
            self.advance();
        }
    }
}

impl ReplacementPolicy for Clock {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn on_access(&mut self, access: &AccessRecord) -> AccessOutcome {
        if let Some(frame) = self.frames.iter_mut().find(|f| f.page == access.page) {
            frame.referenced = true;
            return AccessOutcome::Hit;
        }

        let evicted = if self.frames.len() < self.capacity {
            self.frames.push(Frame::new(access.page));
            None
        } else {
            let victim = self.replace(access.page);
            trace!(%victim, page = %access.page, slot = self.hand, "clock evict");
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
