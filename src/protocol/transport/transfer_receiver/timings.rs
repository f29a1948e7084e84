//! Interval bounds and initial estimate used by the receiver's timeout logic.
use embassy_time::Duration;

use crate::error::TimingsError;
use crate::protocol::transport::{
    DEFAULT_TRANSFER_INTERVAL_US, MAX_TRANSFER_INTERVAL_US, MIN_TRANSFER_INTERVAL_US,
};

/// Inter-transfer interval configuration, fixed when a receiver is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransferTimings {
    min_interval: Duration,
    max_interval: Duration,
    default_interval: Duration,
}

impl Default for TransferTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TransferTimings {
    /// Timings built from the crate-level constants.
    pub const DEFAULT: Self = Self {
        min_interval: Duration::from_micros(MIN_TRANSFER_INTERVAL_US),
        max_interval: Duration::from_micros(MAX_TRANSFER_INTERVAL_US),
        default_interval: Duration::from_micros(DEFAULT_TRANSFER_INTERVAL_US),
    };

    /// Validate and build a custom configuration.
    ///
    /// # Errors
    ///
    /// - [`TimingsError::ZeroMinimum`] when `min_interval` is zero
    /// - [`TimingsError::InvertedBounds`] when `min_interval > max_interval`
    /// - [`TimingsError::DefaultOutOfBounds`] when `default_interval` is outside the bounds
    pub fn new(
        min_interval: Duration,
        max_interval: Duration,
        default_interval: Duration,
    ) -> Result<Self, TimingsError> {
        if min_interval.as_micros() == 0 {
            return Err(TimingsError::ZeroMinimum);
        }
        if min_interval > max_interval {
            return Err(TimingsError::InvertedBounds);
        }
        if default_interval < min_interval || default_interval > max_interval {
            return Err(TimingsError::DefaultOutOfBounds);
        }
        Ok(Self {
            min_interval,
            max_interval,
            default_interval,
        })
    }

    /// Lower clamp for each measured interval.
    #[inline]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Upper clamp for each measured interval.
    #[inline]
    pub const fn max_interval(&self) -> Duration {
        self.max_interval
    }

    /// Estimate used until the sender's rate has been measured.
    #[inline]
    pub const fn default_interval(&self) -> Duration {
        self.default_interval
    }

    /// Clamp a raw interval sample (µs) into `[min, max]`.
    #[inline]
    pub(crate) fn clamp_us(&self, interval_us: u64) -> u64 {
        interval_us.clamp(self.min_interval.as_micros(), self.max_interval.as_micros())
    }
}
