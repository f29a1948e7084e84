//! `korri-uavcan` library: per-session transfer reception for the UAVCAN
//! CAN transport in a `no_std` environment. The crate exposes the transfer ID
//! arithmetic, the received frame view, the reassembly buffer contracts, and the
//! receiver state machine that rebuilds multi-frame transfers.
#![no_std]
//==================================================================================
/// Frame rejection, reassembly, and configuration errors.
pub mod error;
/// UAVCAN transport: transfer IDs, received frames, buffers, and the receiver.
pub mod protocol;
//==================================================================================
