//! Fragment reassembly for incoming Zippy messages.

use std::collections::BTreeMap;

use bandwire_frame::STATUS_SIZE;
use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::error::{Result, TransportError};

/// Outcome of feeding one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The fragment arrived ahead of its turn and was held back.
    Parked,
    /// The fragment (and any parked successors) extended the message.
    Accepted,
    /// The announced length has been reached.
    Complete,
}

/// A reassembled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub body: Bytes,
    /// Status trailer the device appended past the announced length.
    pub trailer: Option<Bytes>,
}

impl Message {
    /// Body followed by the trailer, as the byte stream a reader sees.
    pub fn into_stream_bytes(self) -> Bytes {
        match self.trailer {
            None => self.body,
            Some(trailer) => {
                let mut buf = BytesMut::with_capacity(self.body.len() + trailer.len());
                buf.extend_from_slice(&self.body);
                buf.extend_from_slice(&trailer);
                buf.freeze()
            }
        }
    }
}

/// Rebuilds one announced message from sequence-numbered fragments.
///
/// Fragments are consumed strictly in sequence order. A fragment whose
/// sequence byte is ahead of the expected one is parked until its
/// predecessors arrive.
#[derive(Debug)]
pub struct Reassembler {
    announced: usize,
    remaining: usize,
    next_id: u8,
    body: BytesMut,
    trailer: Option<Bytes>,
    parked: BTreeMap<u8, Bytes>,
}

impl Reassembler {
    pub fn new(announced: usize) -> Self {
        Self {
            announced,
            remaining: announced,
            next_id: 0,
            body: BytesMut::with_capacity(announced),
            trailer: None,
            parked: BTreeMap::new(),
        }
    }

    pub fn announced(&self) -> usize {
        self.announced
    }

    pub fn received(&self) -> usize {
        self.body.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn parked(&self) -> usize {
        self.parked.len()
    }

    /// Feed one fragment.
    pub fn push(&mut self, id: u8, payload: Bytes) -> Result<Progress> {
        if self.is_complete() {
            return Err(TransportError::Reassembly(format!(
                "fragment {id} after message of {} bytes was complete",
                self.announced
            )));
        }

        if id != self.next_id {
            if self.parked.insert(id, payload).is_some() {
                return Err(TransportError::Reassembly(format!("fragment {id} delivered twice")));
            }
            trace!(id, expected = self.next_id, "fragment parked");
            return Ok(Progress::Parked);
        }

        self.accept(id, payload)?;
        while !self.is_complete() {
            let Some(next) = self.parked.remove(&self.next_id) else {
                break;
            };
            let id = self.next_id;
            self.accept(id, next)?;
        }

        if self.is_complete() {
            Ok(Progress::Complete)
        } else {
            Ok(Progress::Accepted)
        }
    }

    fn accept(&mut self, id: u8, payload: Bytes) -> Result<()> {
        let len = payload.len();
        let remaining = self.remaining;
        if len == remaining + STATUS_SIZE {
            self.body.extend_from_slice(&payload[..remaining]);
            self.trailer = Some(payload.slice(remaining..));
            self.remaining = 0;
        } else if len == remaining {
            self.body.extend_from_slice(&payload);
            self.remaining = 0;
        } else if len < remaining {
            self.body.extend_from_slice(&payload);
            self.remaining -= len;
            self.next_id = self.next_id.wrapping_add(1);
        } else {
            return Err(TransportError::Reassembly(format!(
                "fragment {id} carries {len} bytes with {remaining} remaining"
            )));
        }
        trace!(id, len, remaining = self.remaining, "fragment accepted");
        Ok(())
    }

    /// Acknowledgement flag for the device.
    pub fn ack(&self) -> bool {
        let received = self.received();
        received == self.announced || received + STATUS_SIZE == self.announced
    }

    pub fn finish(self) -> Message {
        Message {
            body: self.body.freeze(),
            trailer: self.trailer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(range: std::ops::Range<u8>) -> Bytes {
        range.collect::<Vec<u8>>().into()
    }

    #[test]
    fn in_order_fragments_complete() {
        let mut r = Reassembler::new(46);
        assert_eq!(r.push(0, bytes(0..20)).unwrap(), Progress::Accepted);
        assert_eq!(r.push(1, bytes(20..40)).unwrap(), Progress::Accepted);
        assert_eq!(r.push(2, bytes(40..46)).unwrap(), Progress::Complete);
        assert!(r.ack());

        let message = r.finish();
        assert_eq!(message.body, bytes(0..46));
        assert_eq!(message.trailer, None);
        let stream = message.into_stream_bytes();
        assert_eq!(&stream[..40], &bytes(0..40)[..]);
        assert_eq!(&stream[40..], &bytes(40..46)[..]);
    }

    #[test]
    fn trailer_past_announced_length_is_split_off() {
        let mut r = Reassembler::new(40);
        r.push(0, bytes(0..20)).unwrap();
        assert_eq!(r.push(1, bytes(20..46)).unwrap(), Progress::Complete);
        assert!(r.ack());

        let message = r.finish();
        assert_eq!(message.body, bytes(0..40));
        assert_eq!(message.trailer, Some(bytes(40..46)));
        assert_eq!(message.into_stream_bytes(), bytes(0..46));
    }

    #[test]
    fn early_fragment_is_parked_until_predecessor_arrives() {
        let mut r = Reassembler::new(46);
        assert_eq!(r.push(1, bytes(20..40)).unwrap(), Progress::Parked);
        assert_eq!(r.received(), 0);
        assert_eq!(r.parked(), 1);

        assert_eq!(r.push(0, bytes(0..20)).unwrap(), Progress::Accepted);
        assert_eq!(r.received(), 40);
        assert_eq!(r.parked(), 0);

        assert_eq!(r.push(2, bytes(40..46)).unwrap(), Progress::Complete);
        assert_eq!(r.finish().body, bytes(0..46));
    }

    #[test]
    fn parked_tail_completes_message() {
        let mut r = Reassembler::new(30);
        assert_eq!(r.push(2, bytes(20..30)).unwrap(), Progress::Parked);
        assert_eq!(r.push(1, bytes(10..20)).unwrap(), Progress::Parked);
        assert_eq!(r.push(0, bytes(0..10)).unwrap(), Progress::Complete);
        assert_eq!(r.finish().body, bytes(0..30));
    }

    #[test]
    fn oversized_fragment_is_fatal() {
        let mut r = Reassembler::new(10);
        let result = r.push(0, bytes(0..12));
        assert!(matches!(result, Err(TransportError::Reassembly(_))));
    }

    #[test]
    fn duplicate_parked_fragment_is_fatal() {
        let mut r = Reassembler::new(30);
        r.push(1, bytes(0..10)).unwrap();
        assert!(r.push(1, bytes(0..10)).is_err());
    }

    #[test]
    fn fragment_after_completion_is_fatal() {
        let mut r = Reassembler::new(4);
        r.push(0, bytes(0..4)).unwrap();
        assert!(r.push(1, bytes(0..1)).is_err());
    }

    #[test]
    fn sequence_byte_wraps() {
        let mut r = Reassembler::new(257);
        for id in 0..=255u8 {
            r.push(id, Bytes::from_static(&[0])).unwrap();
        }
        assert_eq!(r.push(0, Bytes::from_static(&[1])).unwrap(), Progress::Complete);
        assert_eq!(r.received(), 257);
    }
}
