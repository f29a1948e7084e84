//! UAVCAN transfer receiver: rebuilds the transfers of one session (one
//! sender, one data type) from its frames, possibly received over several
//! redundant interfaces.
//!
//! The receiver performs no I/O and runs no timer. Every decision is a function
//! of the frame timestamps supplied by the caller, so timeouts are only noticed
//! when `add_frame` (or [`TransferReceiver::is_timed_out`]) is invoked.
use embassy_time::Duration;

use crate::error::{FrameRejection, ReassemblyError};
use crate::protocol::transport::{
    rx_frame::{RxFrame, FRAME_INDEX_MAX},
    traits::transfer_buffer::{TransferBuffer, TransferBufferAccessor},
    transfer_id::{TidRelation, TransferId},
    CRC_LEN,
};

pub mod restart;
pub mod timings;

pub use restart::{RestartAction, RestartConditions};
pub use timings::TransferTimings;

//==================================================================================Enums and Structs
/// Outcome of feeding one frame to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiveResult {
    /// Transfer still in progress, or the frame was rejected or discarded.
    NotComplete,
    /// Multi-frame transfer finished; the session buffer holds its payload.
    Complete,
    /// Single-frame transfer finished; no buffer is involved.
    SingleFrame,
}

/// Reassembly state of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceiver {
    timings: TransferTimings,
    prev_transfer_ts_monotonic: u64,
    this_transfer_ts_monotonic: u64,
    first_frame_ts_utc: u64,
    transfer_interval_us: u64,
    buffer_write_pos: usize,
    this_transfer_crc: u16,
    tid: TransferId,
    next_frame_index: u8,
    iface_index: u8,
}

impl Default for TransferReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferReceiver {
    /// Receiver using [`TransferTimings::DEFAULT`].
    pub fn new() -> Self {
        Self::with_timings(TransferTimings::DEFAULT)
    }

    /// Receiver with custom interval bounds.
    pub fn with_timings(timings: TransferTimings) -> Self {
        Self {
            timings,
            prev_transfer_ts_monotonic: 0,
            this_transfer_ts_monotonic: 0,
            first_frame_ts_utc: 0,
            transfer_interval_us: timings.default_interval().as_micros(),
            buffer_write_pos: 0,
            this_transfer_crc: 0,
            tid: TransferId::new(0),
            next_frame_index: 0,
            iface_index: 0,
        }
    }

    //==================================================================================Accessors
    /// Transfer ID being received, or expected next while idle.
    #[inline]
    pub fn transfer_id(&self) -> TransferId {
        self.tid
    }

    /// Interface currently considered authoritative.
    #[inline]
    pub fn iface_index(&self) -> u8 {
        self.iface_index
    }

    /// Frame index expected next within the current transfer.
    #[inline]
    pub fn next_frame_index(&self) -> u8 {
        self.next_frame_index
    }

    /// CRC extracted from the first frame of the last multi-frame transfer;
    /// zero after a single-frame transfer.
    #[inline]
    pub fn last_transfer_crc(&self) -> u16 {
        self.this_transfer_crc
    }

    /// UTC timestamp of the first frame of the current (or just completed) transfer.
    #[inline]
    pub fn first_frame_utc_timestamp(&self) -> u64 {
        self.first_frame_ts_utc
    }

    /// Monotonic start timestamp of the last completed transfer; zero if none.
    #[inline]
    pub fn last_transfer_monotonic_timestamp(&self) -> u64 {
        self.prev_transfer_ts_monotonic
    }

    /// Smoothed interval between transfer starts.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_micros(self.transfer_interval_us)
    }

    /// Timing configuration fixed at construction.
    #[inline]
    pub fn timings(&self) -> &TransferTimings {
        &self.timings
    }

    /// Whether a transfer start has ever been recorded.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.this_transfer_ts_monotonic != 0
    }

    //==================================================================================Timing
    /// Whether the current transfer is dead at `ts_monotonic`.
    ///
    /// The window is `interval * (HALF_RANGE + 1)`: past it, the sender may have
    /// wrapped the transfer ID around and a new transfer must not be mistaken
    /// for a repeat of the old one.
    pub fn is_timed_out(&self, ts_monotonic: u64) -> bool {
        let start = self.this_transfer_ts_monotonic;
        if ts_monotonic <= start {
            return false;
        }
        let window = self.transfer_interval_us * (u64::from(TransferId::HALF_RANGE) + 1);
        ts_monotonic - start > window
    }

    /// Whether the authoritative interface has been silent for more than two intervals.
    fn is_iface_timed_out(&self, ts_monotonic: u64) -> bool {
        // `add_frame` rejects older timestamps first; saturation only covers direct
        // `restart_conditions` calls on a stale frame.
        ts_monotonic.saturating_sub(self.this_transfer_ts_monotonic) > self.transfer_interval_us * 2
    }

    /// Shift the transfer start timestamps and fold the new interval sample
    /// into the 7/8 exponential moving average.
    fn update_transfer_timings(&mut self) {
        let prev_prev_ts = self.prev_transfer_ts_monotonic;
        self.prev_transfer_ts_monotonic = self.this_transfer_ts_monotonic;

        if prev_prev_ts != 0
            && self.prev_transfer_ts_monotonic != 0
            && self.prev_transfer_ts_monotonic >= prev_prev_ts
        {
            let interval = self
                .timings
                .clamp_us(self.prev_transfer_ts_monotonic - prev_prev_ts);
            self.transfer_interval_us = (self.transfer_interval_us * 7 + interval) / 8;
        }
    }

    //==================================================================================Process Functions
    /// Derive the restart conditions for `frame` against the current state.
    pub fn restart_conditions(&self, frame: &RxFrame) -> RestartConditions {
        let ts = frame.monotonic_timestamp;
        RestartConditions {
            not_initialized: !self.is_initialized(),
            receiver_timed_out: self.is_timed_out(ts),
            same_iface: frame.iface_index == self.iface_index,
            first_frame: frame.first_frame,
            tid_relation: self.tid.relation_to(frame.transfer_id),
            iface_timed_out: self.is_iface_timed_out(ts),
        }
    }

    /// Feed one frame of this session.
    ///
    /// * `frame` – received frame, already routed to this session
    /// * `accessor` – accessor bound to this session's reassembly buffer
    ///
    /// Returns [`ReceiveResult::Complete`] when a multi-frame transfer has been
    /// reassembled into the accessor's buffer, [`ReceiveResult::SingleFrame`] for
    /// a one-frame transfer, and [`ReceiveResult::NotComplete`] otherwise. After a
    /// completion, [`last_transfer_crc`](Self::last_transfer_crc) and
    /// [`first_frame_utc_timestamp`](Self::first_frame_utc_timestamp) describe the
    /// finished transfer.
    pub fn add_frame<A: TransferBufferAccessor>(
        &mut self,
        frame: &RxFrame,
        accessor: &mut A,
    ) -> ReceiveResult {
        if let Err(_rejection) = self.check_timestamp(frame) {
            #[cfg(feature = "defmt")]
            defmt::trace!("TransferReceiver: {}, {}", _rejection, frame);
            return ReceiveResult::NotComplete;
        }

        let conditions = self.restart_conditions(frame);
        match conditions.action() {
            RestartAction::Keep => {}
            action => {
                #[cfg(feature = "defmt")]
                defmt::debug!("TransferReceiver: restart {}, {}", conditions, frame);

                accessor.remove();
                self.iface_index = frame.iface_index;
                self.tid = frame.transfer_id;
                self.next_frame_index = 0;
                self.buffer_write_pos = 0;
                self.this_transfer_crc = 0;

                if action == RestartAction::RestartAndDrop {
                    // Mid-transfer frame of an unknown transfer: nothing to rebuild from.
                    self.tid.increment();
                    return ReceiveResult::NotComplete;
                }
            }
        }

        if let Err(_rejection) = self.validate(frame) {
            #[cfg(feature = "defmt")]
            defmt::trace!("TransferReceiver: {}, {}", _rejection, frame);
            return ReceiveResult::NotComplete;
        }

        self.receive(frame, accessor)
    }

    /// Refuse unset timestamps and frames older than a recorded transfer start.
    fn check_timestamp(&self, frame: &RxFrame) -> Result<(), FrameRejection> {
        let ts = frame.monotonic_timestamp;
        if ts == 0 {
            return Err(FrameRejection::InvalidTimestamp);
        }
        let reference = self
            .prev_transfer_ts_monotonic
            .max(self.this_transfer_ts_monotonic);
        if ts < reference {
            return Err(FrameRejection::StaleTimestamp {
                timestamp: ts,
                reference,
            });
        }
        Ok(())
    }

    /// Accept only the exact continuation of the current transfer.
    fn validate(&self, frame: &RxFrame) -> Result<(), FrameRejection> {
        if frame.iface_index != self.iface_index {
            return Err(FrameRejection::WrongInterface {
                expected: self.iface_index,
                actual: frame.iface_index,
            });
        }

        if frame.first_frame && !frame.last_frame && frame.payload.len() < CRC_LEN {
            return Err(FrameRejection::MissingCrc);
        }

        if frame.frame_index == FRAME_INDEX_MAX && !frame.last_frame {
            return Err(FrameRejection::UnterminatedTransfer);
        }

        if frame.frame_index != self.next_frame_index {
            return Err(FrameRejection::UnexpectedFrameIndex {
                expected: self.next_frame_index,
                actual: frame.frame_index,
            });
        }

        if self.tid.relation_to(frame.transfer_id) != TidRelation::Same {
            return Err(FrameRejection::UnexpectedTransferId {
                expected: self.tid.get(),
                actual: frame.transfer_id.get(),
            });
        }

        Ok(())
    }

    /// Store a validated frame and detect the end of the transfer.
    fn receive<A: TransferBufferAccessor>(
        &mut self,
        frame: &RxFrame,
        accessor: &mut A,
    ) -> ReceiveResult {
        // Transfer timestamps always come from the first frame.
        if frame.first_frame {
            self.this_transfer_ts_monotonic = frame.monotonic_timestamp;
            self.first_frame_ts_utc = frame.utc_timestamp;
        }

        if frame.is_single_frame() {
            accessor.remove();
            self.update_transfer_timings();
            self.prepare_for_next_transfer();
            // Single-frame transfers carry no CRC.
            self.this_transfer_crc = 0;
            return ReceiveResult::SingleFrame;
        }

        let written = match accessor.access_or_create() {
            Some(buffer) => self.write_payload(frame, buffer),
            None => Err(ReassemblyError::BufferUnavailable),
        };

        match written {
            Ok(()) => {}
            Err(ReassemblyError::BufferUnavailable) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("TransferReceiver: buffer unavailable, {}", frame);
                self.prepare_for_next_transfer();
                return ReceiveResult::NotComplete;
            }
            Err(_error) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("TransferReceiver: payload write failed: {}, {}", _error, frame);
                accessor.remove();
                self.prepare_for_next_transfer();
                return ReceiveResult::NotComplete;
            }
        }
        self.next_frame_index = self.next_frame_index.saturating_add(1);

        if frame.last_frame {
            self.update_transfer_timings();
            self.prepare_for_next_transfer();
            return ReceiveResult::Complete;
        }
        ReceiveResult::NotComplete
    }

    /// Append the frame payload at the current write position.
    ///
    /// The first frame contributes its leading two bytes as the transfer CRC
    /// (little-endian) and the remainder as payload. `buffer_write_pos` only
    /// advances when the whole slice was stored.
    fn write_payload<B: TransferBuffer>(
        &mut self,
        frame: &RxFrame,
        buffer: &mut B,
    ) -> Result<(), ReassemblyError> {
        let data = if frame.first_frame {
            let (crc, data) = frame
                .payload
                .split_first_chunk::<CRC_LEN>()
                .ok_or(ReassemblyError::MissingCrc)?;
            self.this_transfer_crc = u16::from_le_bytes(*crc);
            data
        } else {
            frame.payload
        };

        let written = buffer.write(self.buffer_write_pos, data);
        if written != data.len() {
            return Err(ReassemblyError::ShortWrite {
                requested: data.len(),
                written,
            });
        }
        self.buffer_write_pos += written;
        Ok(())
    }

    /// Advance to the next transfer ID and rewind the per-transfer counters.
    fn prepare_for_next_transfer(&mut self) {
        self.tid.increment();
        self.next_frame_index = 0;
        self.buffer_write_pos = 0;
    }
}
