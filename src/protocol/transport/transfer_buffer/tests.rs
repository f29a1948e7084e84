//! Unit tests for the static buffer and its single-slot accessor.
use super::*;

#[test]
/// Positional writes land where asked and extend the length.
fn test_positional_write() {
    let mut buffer = StaticTransferBuffer::<8>::new();
    assert_eq!(buffer.write(0, &[1, 2, 3]), 3);
    assert_eq!(buffer.write(3, &[4, 5]), 2);
    assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);

    // Rewriting inside the range keeps the length.
    assert_eq!(buffer.write(1, &[9]), 1);
    assert_eq!(buffer.as_slice(), &[1, 9, 3, 4, 5]);
}

#[test]
/// Writes beyond capacity are truncated and report the short count.
fn test_write_truncated_at_capacity() {
    let mut buffer = StaticTransferBuffer::<4>::new();
    assert_eq!(buffer.write(2, &[1, 2, 3]), 2);
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.write(4, &[7]), 0);
    assert_eq!(buffer.write(10, &[7]), 0);
    assert_eq!(buffer.len(), 4);
}

#[test]
/// Empty writes succeed trivially.
fn test_empty_write() {
    let mut buffer = StaticTransferBuffer::<4>::new();
    assert_eq!(buffer.write(0, &[]), 0);
    assert!(buffer.is_empty());
}

#[test]
/// The slot exposes a buffer only between `create` and `remove`.
fn test_slot_lifecycle() {
    let mut slot = StaticBufferSlot::<16>::new();
    assert!(slot.access().is_none());
    assert!(slot.buffer().is_none());

    let buffer = slot.create().expect("static slot always allocates");
    buffer.write(0, &[0xAA, 0xBB]);
    assert!(slot.is_allocated());
    assert_eq!(slot.buffer().map(|b| b.as_slice()), Some(&[0xAA, 0xBB][..]));

    slot.remove();
    assert!(slot.access().is_none());

    // A fresh buffer starts empty.
    let buffer = slot.create().expect("static slot always allocates");
    assert!(buffer.is_empty());
}

#[test]
/// `access_or_create` reuses an existing buffer instead of resetting it.
fn test_access_or_create_reuses() {
    let mut slot = StaticBufferSlot::<16>::new();
    slot.access_or_create()
        .expect("created on first use")
        .write(0, &[1, 2]);
    slot.access_or_create()
        .expect("existing buffer returned")
        .write(2, &[3]);
    assert_eq!(slot.buffer().map(|b| b.len()), Some(3));
}

#[test]
/// Reusing a buffer without `remove` keeps the previous tail past a shorter write.
fn test_reuse_without_remove_keeps_high_water_mark() {
    let mut slot = StaticBufferSlot::<16>::new();
    slot.create()
        .expect("static slot always allocates")
        .write(0, &[1, 2, 3, 4, 5]);
    slot.access_or_create()
        .expect("existing buffer returned")
        .write(0, &[9, 9]);
    assert_eq!(slot.buffer().map(|b| b.as_slice()), Some(&[9, 9, 3, 4, 5][..]));

    slot.remove();
    slot.create()
        .expect("static slot always allocates")
        .write(0, &[9, 9]);
    assert_eq!(slot.buffer().map(|b| b.as_slice()), Some(&[9, 9][..]));
}
