//! UAVCAN CAN transport layer: transfer identifiers, received frame views,
//! reassembly buffer contracts, and the per-session transfer receiver.
//!
//! ## Transfer Timing Constants
//!
//! These constants bound the inter-transfer interval estimate the receiver
//! maintains for every session. All values are in microseconds, the unit of
//! the monotonic timestamps carried by [`RxFrame`](rx_frame::RxFrame).

pub mod rx_frame;
pub mod traits;
pub mod transfer_buffer;
pub mod transfer_id;
pub mod transfer_receiver;

/// Interval assumed for a session before two transfers have been observed (µs).
///
/// Publishers commonly run between 1 Hz and 100 Hz; 500 ms keeps the initial
/// timeout window (five intervals) comfortably above the slowest regular rate.
pub const DEFAULT_TRANSFER_INTERVAL_US: u64 = 500 * 1000;

/// Lower clamp applied to each measured inter-transfer interval (µs).
///
/// Back-to-back transfers would otherwise collapse the estimate towards zero
/// and make every short pause look like a timeout.
pub const MIN_TRANSFER_INTERVAL_US: u64 = 1000;

/// Upper clamp applied to each measured inter-transfer interval (µs).
pub const MAX_TRANSFER_INTERVAL_US: u64 = 10 * 1000 * 1000;

/// Length of the transfer CRC carried at the head of the first frame of a
/// multi-frame transfer (bytes, little-endian).
pub const CRC_LEN: usize = 2;
