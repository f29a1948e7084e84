/// Test doubles to split transfers into frames and observe buffer usage.
use korri_uavcan::protocol::transport::{
    rx_frame::RxFrame,
    traits::transfer_buffer::TransferBufferAccessor,
    transfer_buffer::{StaticBufferSlot, StaticTransferBuffer},
    transfer_id::TransferId,
};

/// Payload bytes per frame on classic CAN once the tail byte is reserved.
#[allow(dead_code)]
pub const FRAME_PAYLOAD: usize = 7;

#[allow(dead_code)]
/// Stored frame: owns its payload so sequences can be built up front.
pub struct OwnedFrame {
    pub payload: Vec<u8>,
    pub transfer_id: u8,
    pub frame_index: u8,
    pub first_frame: bool,
    pub last_frame: bool,
}

#[allow(dead_code)]
impl OwnedFrame {
    /// Borrow as an `RxFrame` received on `iface` at `ts` (µs).
    pub fn at(&self, iface: u8, ts: u64) -> RxFrame<'_> {
        RxFrame::new(TransferId::new(self.transfer_id), self.frame_index, &self.payload)
            .with_flags(self.first_frame, self.last_frame)
            .on_iface(iface)
            .received_at(ts, ts)
    }
}

#[allow(dead_code)]
/// Split `payload` into the frame sequence of one transfer. Multi-frame
/// transfers get `crc` prepended (little-endian) to the first frame.
pub fn split_transfer(transfer_id: u8, crc: u16, payload: &[u8]) -> Vec<OwnedFrame> {
    if payload.len() <= FRAME_PAYLOAD {
        return vec![OwnedFrame {
            payload: payload.to_vec(),
            transfer_id,
            frame_index: 0,
            first_frame: true,
            last_frame: true,
        }];
    }

    let mut stream = crc.to_le_bytes().to_vec();
    stream.extend_from_slice(payload);
    let chunks: Vec<&[u8]> = stream.chunks(FRAME_PAYLOAD).collect();
    let count = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| OwnedFrame {
            payload: chunk.to_vec(),
            transfer_id,
            frame_index: index as u8,
            first_frame: index == 0,
            last_frame: index + 1 == count,
        })
        .collect()
}

#[derive(Default)]
#[allow(dead_code)]
/// Single-slot accessor counting allocations and releases.
pub struct RecordingSlot {
    pub slot: StaticBufferSlot<256>,
    pub created: usize,
    pub removed: usize,
}

#[allow(dead_code)]
impl RecordingSlot {
    /// Bytes reassembled so far, if a buffer is allocated.
    pub fn payload(&self) -> Option<Vec<u8>> {
        self.slot.buffer().map(|b| b.as_slice().to_vec())
    }
}

impl TransferBufferAccessor for RecordingSlot {
    type Buffer = StaticTransferBuffer<256>;

    fn access(&mut self) -> Option<&mut Self::Buffer> {
        self.slot.access()
    }

    fn create(&mut self) -> Option<&mut Self::Buffer> {
        self.created += 1;
        self.slot.create()
    }

    fn remove(&mut self) {
        if self.slot.is_allocated() {
            self.removed += 1;
        }
        self.slot.remove();
    }
}
