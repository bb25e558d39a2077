// SPDX-License-Identifier: MPL-2.0
//! Auto-play interval and timer handles.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_SECS, MAX_AUTOPLAY_INTERVAL_SECS, MIN_AUTOPLAY_INTERVAL_SECS,
};
use std::time::Duration;

/// Delay between automatic advances, in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (3–60 seconds).
///
/// # Example
///
/// ```
/// use keepsake::slideshow::AutoPlayInterval;
///
/// let interval = AutoPlayInterval::new(20);
/// assert_eq!(interval.value(), 20);
///
/// // Values outside range are clamped
/// let too_fast = AutoPlayInterval::new(1);
/// assert_eq!(too_fast.value(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlayInterval(u32);

impl AutoPlayInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_AUTOPLAY_INTERVAL_SECS, MAX_AUTOPLAY_INTERVAL_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoPlayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_SECS)
    }
}

/// Identity of one running auto-play timer.
///
/// Restarting auto-play issues a new handle; ticks still carrying an older
/// one are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoPlayHandle(pub u64);
