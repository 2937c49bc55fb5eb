//! Bounds on length prefixes.

use crate::Error;
use core::ops::{Bound, RangeBounds};

/// Inclusive bounds on a decoded length or item count.
///
/// Every length prefix is checked against a [RangeCfg] before anything is allocated, so a
/// corrupted prefix fails with [Error::InvalidLength] instead of reserving gigabytes.
///
/// ```
/// use waypoint_codec::RangeCfg;
///
/// let names = RangeCfg::new(1..=255);
/// assert!(names.contains(255));
/// assert!(!names.contains(0));
/// assert_eq!(RangeCfg::new(..16), RangeCfg::at_most(15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeCfg {
    min: usize,
    max: usize,
}

impl RangeCfg {
    /// Accepts any length.
    pub const ANY: Self = Self {
        min: 0,
        max: usize::MAX,
    };

    /// Accepts lengths of at most `max`.
    pub const fn at_most(max: usize) -> Self {
        Self { min: 0, max }
    }

    /// Converts any range of lengths. An empty range rejects every length.
    pub fn new(range: impl RangeBounds<usize>) -> Self {
        let min = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let max = match range.end_bound() {
            Bound::Included(&end) => Some(end),
            Bound::Excluded(&end) => end.checked_sub(1),
            Bound::Unbounded => Some(usize::MAX),
        };
        match (min, max) {
            (Some(min), Some(max)) => Self { min, max },
            _ => Self { min: 1, max: 0 },
        }
    }

    /// Smallest accepted length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted length.
    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Returns `len` if it is accepted, [Error::InvalidLength] otherwise.
    pub fn check(&self, len: usize) -> Result<usize, Error> {
        if self.contains(len) {
            Ok(len)
        } else {
            Err(Error::InvalidLength(len))
        }
    }
}

impl Default for RangeCfg {
    fn default() -> Self {
        Self::ANY
    }
}

macro_rules! from_ranges {
    ($($range:ty),*) => {
        $(
            impl From<$range> for RangeCfg {
                fn from(range: $range) -> Self {
                    Self::new(range)
                }
            }
        )*
    };
}

from_ranges!(
    core::ops::Range<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull
);
