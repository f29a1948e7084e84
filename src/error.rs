//! Error definitions shared across library modules.
//! None of these escape [`TransferReceiver::add_frame`](crate::protocol::transport::transfer_receiver::TransferReceiver::add_frame):
//! the receiver folds them into `ReceiveResult::NotComplete` and only reports them
//! through the optional `defmt` traces.
use thiserror_no_std::Error;

//==================================================================================FRAME_REJECTION
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Reasons an incoming frame is refused by the receiver.
pub enum FrameRejection {
    /// Monotonic timestamp is zero (unset by the driver).
    #[error("Invalid monotonic timestamp")]
    InvalidTimestamp,
    /// Monotonic timestamp is older than a recorded transfer start.
    #[error("Stale frame: {timestamp} older than {reference}")]
    StaleTimestamp { timestamp: u64, reference: u64 },
    /// Frame arrived on an interface other than the authoritative one.
    #[error("Frame from interface {actual}, expected {expected}")]
    WrongInterface { expected: u8, actual: u8 },
    /// First frame of a multi-frame transfer is too short to carry the CRC.
    #[error("CRC expected in first frame")]
    MissingCrc,
    /// Frame index space exhausted without an end-of-transfer flag.
    #[error("Unterminated transfer")]
    UnterminatedTransfer,
    /// Frame index is not the next expected one.
    #[error("Unexpected frame index {actual}, expected {expected}")]
    UnexpectedFrameIndex { expected: u8, actual: u8 },
    /// Transfer ID is not the one currently being received.
    #[error("Unexpected transfer ID {actual}, current {expected}")]
    UnexpectedTransferId { expected: u8, actual: u8 },
}

//==================================================================================REASSEMBLY_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while storing a frame payload into the session buffer.
pub enum ReassemblyError {
    /// The accessor could neither return nor create a buffer.
    #[error("Transfer buffer unavailable")]
    BufferUnavailable,
    /// First frame shorter than the CRC prefix.
    #[error("First frame lacks the CRC prefix")]
    MissingCrc,
    /// Buffer accepted fewer bytes than requested (capacity exceeded).
    #[error("Short write -> requested: {requested}, written: {written}")]
    ShortWrite { requested: usize, written: usize },
}

//==================================================================================TIMINGS_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Inconsistent transfer interval configuration.
pub enum TimingsError {
    /// Minimum interval must be strictly positive.
    #[error("Minimum transfer interval is zero")]
    ZeroMinimum,
    /// Minimum interval exceeds the maximum.
    #[error("Minimum transfer interval above maximum")]
    InvertedBounds,
    /// Default interval lies outside `[min, max]`.
    #[error("Default transfer interval out of bounds")]
    DefaultOutOfBounds,
}
