//! Abstraction traits used by the transport layer (reassembly buffer storage).
pub mod transfer_buffer;
