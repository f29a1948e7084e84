//! Decoded view of one received UAVCAN CAN frame, as handed over by the
//! driver layer. The receiver only ever reads it.
use crate::protocol::transport::transfer_id::TransferId;

/// Reserved frame index: a transfer reaching it without the end flag has
/// exhausted its index space.
pub const FRAME_INDEX_MAX: u8 = 15;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Received frame, borrowed from the caller for the duration of one call.
pub struct RxFrame<'a> {
    /// Payload bytes, CRC prefix included for the first frame of a multi-frame transfer.
    pub payload: &'a [u8],
    /// Monotonic reception time in microseconds; `0` means unset.
    pub monotonic_timestamp: u64,
    /// Wall-clock reception time in microseconds. Advisory only.
    pub utc_timestamp: u64,
    /// Transfer the frame belongs to.
    pub transfer_id: TransferId,
    /// Position within the transfer, starting at zero.
    pub frame_index: u8,
    /// Redundant interface the frame was received on.
    pub iface_index: u8,
    /// Start-of-transfer flag.
    pub first_frame: bool,
    /// End-of-transfer flag.
    pub last_frame: bool,
}

impl<'a> RxFrame<'a> {
    /// Frame carrying `payload` at `frame_index` of transfer `transfer_id`.
    /// Flags, interface, and timestamps start cleared.
    pub const fn new(transfer_id: TransferId, frame_index: u8, payload: &'a [u8]) -> Self {
        Self {
            payload,
            monotonic_timestamp: 0,
            utc_timestamp: 0,
            transfer_id,
            frame_index,
            iface_index: 0,
            first_frame: false,
            last_frame: false,
        }
    }

    /// Set the start/end flags.
    pub const fn with_flags(mut self, first_frame: bool, last_frame: bool) -> Self {
        self.first_frame = first_frame;
        self.last_frame = last_frame;
        self
    }

    /// Set the receiving interface.
    pub const fn on_iface(mut self, iface_index: u8) -> Self {
        self.iface_index = iface_index;
        self
    }

    /// Set the monotonic and UTC reception timestamps.
    pub const fn received_at(mut self, monotonic: u64, utc: u64) -> Self {
        self.monotonic_timestamp = monotonic;
        self.utc_timestamp = utc;
        self
    }

    /// Single-frame transfers are both first and last.
    #[inline]
    pub const fn is_single_frame(&self) -> bool {
        self.first_frame && self.last_frame
    }
}
