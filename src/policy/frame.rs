//! Frame - a resident slot in a policy's frame set.
//!
//! A [`Frame`] holds one page plus the metadata replacement policies age:
//! - Referenced bit (cleared by sweeps)
//! - Modified (dirty) bit
//! - Time of last use (WSClock only)

use crate::common::PageId;

/// A resident page and its replacement metadata.
///
/// Frames are owned by exactly one policy instance. On a miss with a full
/// set a frame is overwritten with a fresh one for the incoming page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub page: PageId,
    pub referenced: bool,
    pub modified: bool,
    pub last_used: Option<i64>,
}

impl Frame {
    /// A freshly loaded frame with both bits clear.
    #[inline]
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            referenced: false,
            modified: false,
            last_used: None,
        }
    }

    /// A freshly loaded frame stamped with its load time.
    #[inline]
    pub fn loaded_at(page: PageId, time: i64) -> Self {
        Self {
            last_used: Some(time),
            ..Self::new(page)
        }
    }

    /// Time since last use, or `None` if the frame was never stamped.
    #[inline]
    pub fn age(&self, now: i64) -> Option<i64> {
        self.last_used.map(|t| now.saturating_sub(t))
    }

    /// NRU class: `2 * R + M`, so 0 is the best eviction candidate.
    #[inline]
    pub fn nru_class(&self) -> usize {
        (usize::from(self.referenced) << 1) | usize::from(self.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame = Frame::new(PageId::new(3));
        assert_eq!(frame.page, PageId::new(3));
        assert!(!frame.referenced);
        assert!(!frame.modified);
        assert_eq!(frame.last_used, None);
        assert_eq!(frame.age(10), None);
    }

    #[test]
    fn test_frame_age() {
        let frame = Frame::loaded_at(PageId::new(1), 4);
        assert!(!frame.referenced);
        assert_eq!(frame.age(4), Some(0));
        assert_eq!(frame.age(9), Some(5));
    }

    #[test]
    fn test_nru_classes() {
        let mut frame = Frame::new(PageId::new(0));
        assert_eq!(frame.nru_class(), 0);

        frame.modified = true;
        assert_eq!(frame.nru_class(), 1);

        frame.modified = false;
        frame.referenced = true;
        assert_eq!(frame.nru_class(), 2);

        frame.modified = true;
        assert_eq!(frame.nru_class(), 3);
    }
}
