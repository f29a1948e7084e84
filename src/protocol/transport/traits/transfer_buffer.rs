//! Minimal abstraction over the storage a session reassembles multi-frame
//! transfers into. Allows the receiver to plug into any allocation policy
//! (static slots, shared pools with eviction, heap-backed buffers, etc.).
//!
//! # Ownership
//!
//! The buffer belongs to the session. The receiver borrows it through the
//! accessor for the duration of a single `add_frame` call and never keeps a
//! reference past that call or past `remove()`.

/// Byte store receiving positional payload writes.
pub trait TransferBuffer {
    /// Store `data` starting at `offset` and return how many bytes were
    /// actually written. A count below `data.len()` signals that capacity was
    /// exceeded; the receiver treats it as a failed write.
    fn write(&mut self, offset: usize, data: &[u8]) -> usize;
}

/// Accessor bound to one session's reassembly buffer.
pub trait TransferBufferAccessor {
    type Buffer: TransferBuffer;

    /// Existing buffer of the session, if any.
    fn access(&mut self) -> Option<&mut Self::Buffer>;

    /// Allocate a fresh buffer for the session. `None` when storage is exhausted.
    fn create(&mut self) -> Option<&mut Self::Buffer>;

    /// Release the session buffer. Must be a no-op when none exists.
    fn remove(&mut self);

    /// Existing buffer, or a newly created one when the session has none.
    fn access_or_create(&mut self) -> Option<&mut Self::Buffer> {
        if self.access().is_some() {
            return self.access();
        }
        self.create()
    }
}
