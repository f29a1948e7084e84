//! UAVCAN protocol components. Only the CAN transport reception path lives
//! here; message decoding and session tables are left to the caller.
pub mod transport;
