//! Transfer identifier: the small modular counter a sender stamps on every
//! transfer of a session. Ordering is circular, never linear.

//==================================================================================TRANSFER_ID
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Wraps a `BITLEN`-bit transfer counter inside a `u8`.
pub struct TransferId(u8);

/// Position of an incoming transfer ID relative to the one a receiver tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TidRelation {
    /// Continuation of the current transfer.
    Same,
    /// A newer transfer, less than half the ID space ahead.
    Future,
    /// An old, duplicated, or retransmitted transfer (half the space or more ahead).
    Repeat,
}

impl TransferId {
    /// Width of the counter in bits.
    pub const BITLEN: u32 = 3;
    /// Largest representable value.
    pub const MAX: u8 = (1 << Self::BITLEN) - 1;
    /// Half of the ID space: forward distances at or above it count as repeats.
    pub const HALF_RANGE: u8 = 1 << (Self::BITLEN - 1);

    /// Builds an ID, discarding bits above `BITLEN`.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value & Self::MAX)
    }

    /// Raw counter value.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Advance by one, wrapping to zero after `MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1) & Self::MAX;
    }

    /// Number of increments needed to go from `self` to `other`, modulo `2^BITLEN`.
    #[inline]
    pub const fn forward_distance(&self, other: TransferId) -> u8 {
        other.0.wrapping_sub(self.0) & Self::MAX
    }

    /// Classify `incoming` against this ID using the half-window rule.
    ///
    /// A distance of exactly [`HALF_RANGE`](Self::HALF_RANGE) is a repeat.
    pub const fn relation_to(&self, incoming: TransferId) -> TidRelation {
        let distance = self.forward_distance(incoming);
        if distance == 0 {
            TidRelation::Same
        } else if distance < Self::HALF_RANGE {
            TidRelation::Future
        } else {
            TidRelation::Repeat
        }
    }
}

impl From<u8> for TransferId {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}
