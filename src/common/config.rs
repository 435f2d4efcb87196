//! Configuration for a simulation run.
//!
//! A trace header carries three raw integers: the total number of pages
//! `p`, the frame capacity `m` and the working-set threshold `c`.
//! [`SimConfig::new`] validates them once so the policy engines can rely
//! on `frame_capacity >= 1`, `total_pages != 0` and `ws_threshold >= 0`.
//! A negative `p` is accepted; NRU only ever tests `time % p == 0`.

use crate::common::{Error, Result};

/// Seed used for NRU's random source when the caller doesn't supply one.
pub const DEFAULT_SEED: u64 = 0x5EED_0F_1A6E;

/// Number of worker threads used by the batch driver by default.
pub const DEFAULT_WORKERS: usize = 4;

/// Validated simulation parameters.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::new(8, 3, 2).unwrap();
/// assert_eq!(config.frame_capacity, 3);
/// assert!(SimConfig::new(8, 0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Total distinct pages (`p`). NRU reuses it as its aging period.
    pub total_pages: i64,

    /// Number of resident frames (`m`).
    pub frame_capacity: usize,

    /// WSClock working-set age threshold (`c`).
    pub ws_threshold: i64,
}

impl SimConfig {
    /// Validate raw header values.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] when `m <= 0`, `c < 0` or `p == 0`.
    pub fn new(total_pages: i64, frame_capacity: i64, ws_threshold: i64) -> Result<Self> {
        let frame_capacity = check_frames_and_threshold(frame_capacity, ws_threshold)?;
        if total_pages == 0 {
            return Err(Error::InvalidParameter {
                name: "pages",
                value: total_pages,
            });
        }

        Ok(Self {
            total_pages,
            frame_capacity,
            ws_threshold,
        })
    }
}

/// Check `m` and `c` on their own. An empty trace never reaches the aging
/// step, so `p` goes unchecked there.
pub(crate) fn check_frames_and_threshold(frame_capacity: i64, ws_threshold: i64) -> Result<usize> {
    if frame_capacity <= 0 {
        return Err(Error::InvalidParameter {
            name: "frames",
            value: frame_capacity,
        });
    }
    if ws_threshold < 0 {
        return Err(Error::InvalidParameter {
            name: "threshold",
            value: ws_threshold,
        });
    }

    usize::try_from(frame_capacity).map_err(|_| Error::InvalidParameter {
        name: "frames",
        value: frame_capacity,
    })
}
