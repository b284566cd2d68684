//! Packet-size arithmetic and read-ahead buffering shared by transports
//! that move bytes in fixed-size units.

use std::ops::Range;

use bytes::{Bytes, BytesMut};

/// Byte ranges splitting `len` bytes into packets of at most `packet` bytes.
///
/// An empty payload yields no ranges.
#[cfg_attr(not(feature = "usb"), allow(dead_code))]
pub(crate) fn packet_ranges(len: usize, packet: usize) -> impl Iterator<Item = Range<usize>> {
    let packet = packet.max(1);
    (0..len)
        .step_by(packet)
        .map(move |start| start..(start + packet).min(len))
}

/// The smallest whole number of packets covering `n` bytes, in bytes.
#[cfg_attr(not(feature = "usb"), allow(dead_code))]
pub(crate) fn round_up_to_packet(n: usize, packet: usize) -> usize {
    let packet = packet.max(1);
    n.div_ceil(packet) * packet
}

/// Bytes received beyond what a read asked for, served to later reads.
#[derive(Debug, Default)]
pub(crate) struct Surplus {
    buf: BytesMut,
}

impl Surplus {
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Take up to `max` held bytes.
    pub fn take(&mut self, max: usize) -> Bytes {
        let n = max.min(self.buf.len());
        self.buf.split_to(n).freeze()
    }

    /// Return the first `max` bytes of `data` and hold the rest.
    pub fn split(&mut self, mut data: Bytes, max: usize) -> Bytes {
        let head = data.split_to(max.min(data.len()));
        if !data.is_empty() {
            self.buf.extend_from_slice(&data);
        }
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_split_at_packet_size() {
        let ranges: Vec<_> = packet_ranges(130, 64).collect();
        assert_eq!(ranges, vec![0..64, 64..128, 128..130]);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let ranges: Vec<_> = packet_ranges(128, 64).collect();
        assert_eq!(ranges, vec![0..64, 64..128]);
        assert_eq!(packet_ranges(0, 64).count(), 0);
    }

    #[test]
    fn zero_packet_size_degrades_to_single_bytes() {
        assert_eq!(packet_ranges(3, 0).count(), 3);
        assert_eq!(round_up_to_packet(3, 0), 3);
    }

    #[test]
    fn reads_round_up_to_whole_packets() {
        assert_eq!(round_up_to_packet(6, 64), 64);
        assert_eq!(round_up_to_packet(64, 64), 64);
        assert_eq!(round_up_to_packet(65, 64), 128);
        assert_eq!(round_up_to_packet(0, 64), 0);
    }

    #[test]
    fn surplus_is_served_before_new_data() {
        let mut surplus = Surplus::default();
        let packet: Bytes = (0..64u8).collect::<Vec<_>>().into();

        // A 10-byte read of a 64-byte packet keeps 54 bytes back.
        let head = surplus.split(packet, 10);
        assert_eq!(&head[..], &(0..10u8).collect::<Vec<_>>()[..]);
        assert_eq!(surplus.len(), 54);

        assert_eq!(&surplus.take(4)[..], &[10, 11, 12, 13]);
        let rest = surplus.take(100);
        assert_eq!(rest.len(), 50);
        assert_eq!(rest[0], 14);
        assert!(surplus.is_empty());
    }

    #[test]
    fn short_packet_is_returned_whole() {
        let mut surplus = Surplus::default();
        let head = surplus.split(Bytes::from_static(&[1, 2, 3]), 8);
        assert_eq!(&head[..], &[1, 2, 3]);
        assert!(surplus.is_empty());
    }

    #[test]
    fn clear_drops_held_bytes() {
        let mut surplus = Surplus::default();
        surplus.split(Bytes::from_static(&[9; 12]), 0);
        assert_eq!(surplus.len(), 12);
        surplus.clear();
        assert!(surplus.take(12).is_empty());
    }
}
