//! Fixed-capacity reassembly storage: a stack-allocated buffer and a
//! single-session accessor owning at most one of them. Suitable when each
//! receiver gets a dedicated slot and no pooling is needed.
use crate::protocol::transport::traits::transfer_buffer::{TransferBuffer, TransferBufferAccessor};

//==================================================================================Buffer
/// Stack buffer of `N` bytes. Writes past the capacity are truncated and report
/// the shortened count. The length only grows until [`clear`](Self::clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticTransferBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> Default for StaticTransferBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StaticTransferBuffer<N> {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { data: [0; N], len: 0 }
    }

    /// Total capacity in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// One past the highest byte written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget the content.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
        // Stale bytes are overwritten by the next transfer.
    }

    /// Immutable view over the written bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl<const N: usize> TransferBuffer for StaticTransferBuffer<N> {
    fn write(&mut self, offset: usize, data: &[u8]) -> usize {
        if offset >= N {
            return 0;
        }
        let copy_len = data.len().min(N - offset);
        self.data[offset..offset + copy_len].copy_from_slice(&data[..copy_len]);
        self.len = self.len.max(offset + copy_len);
        copy_len
    }
}

//==================================================================================Accessor
/// Single-session accessor owning one optional [`StaticTransferBuffer`].
///
/// After a completed transfer the payload stays readable through
/// [`buffer`](Self::buffer). The caller reads it, then releases it with
/// `remove()`. Otherwise the next transfer reuses the buffer as is, and its
/// length stays at the high-water mark of both transfers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBufferSlot<const N: usize> {
    buffer: StaticTransferBuffer<N>,
    allocated: bool,
}

impl<const N: usize> StaticBufferSlot<N> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            buffer: StaticTransferBuffer::new(),
            allocated: false,
        }
    }

    /// Session buffer, when one is allocated. Read it after a completed transfer.
    pub fn buffer(&self) -> Option<&StaticTransferBuffer<N>> {
        self.allocated.then_some(&self.buffer)
    }

    /// Whether a buffer is currently allocated.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }
}

impl<const N: usize> TransferBufferAccessor for StaticBufferSlot<N> {
    type Buffer = StaticTransferBuffer<N>;

    fn access(&mut self) -> Option<&mut Self::Buffer> {
        self.allocated.then_some(&mut self.buffer)
    }

    fn create(&mut self) -> Option<&mut Self::Buffer> {
        self.buffer.clear();
        self.allocated = true;
        Some(&mut self.buffer)
    }

    fn remove(&mut self) {
        self.allocated = false;
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
