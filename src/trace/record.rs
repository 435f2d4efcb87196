//! A single recorded memory access.

use std::fmt;

use crate::common::PageId;

/// One entry of an access trace.
///
/// Records are immutable once created and owned by their [`Trace`].
/// Times are non-decreasing across a trace but may repeat.
///
/// [`Trace`]: crate::trace::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    pub page: PageId,
    pub time: i64,
    pub is_write: bool,
}

impl AccessRecord {
    /// A read access.
    #[inline]
    pub fn read(page: u64, time: i64) -> Self {
        Self {
            page: PageId::new(page),
            time,
            is_write: false,
        }
    }

    /// A write access.
    #[inline]
    pub fn write(page: u64, time: i64) -> Self {
        Self {
            page: PageId::new(page),
            time,
            is_write: true,
        }
    }

    /// The trace-file mode letter for this access.
    #[inline]
    pub fn mode(&self) -> char {
        if self.is_write {
            'W'
        } else {
            'R'
        }
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.page.0, self.time, self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let r = AccessRecord::read(3, 10);
        assert_eq!(r.page, PageId::new(3));
        assert_eq!(r.time, 10);
        assert!(!r.is_write);
        assert_eq!(r.mode(), 'R');

        let w = AccessRecord::write(4, 11);
        assert!(w.is_write);
        assert_eq!(w.mode(), 'W');
    }

    #[test]
    fn test_display_matches_trace_line() {
        assert_eq!(format!("{}", AccessRecord::write(7, 12)), "7 12 W");
        assert_eq!(format!("{}", AccessRecord::read(0, 1)), "0 1 R");
    }
}
