use crate::{Price, Timestamp, FRAME_LEN};
use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Insert { timestamp: Timestamp, price: Price },
    Query { min_time: Timestamp, max_time: Timestamp },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestDecoder;

impl Decoder for RequestDecoder {
    type Item = Request;

    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < FRAME_LEN {
            src.reserve(FRAME_LEN - src.len());
            return Ok(None);
        }
        let tag = src.get_u8();
        match tag {
            b'I' => {
                let timestamp = src.get_i32();
                let price = src.get_i32();
                Ok(Some(Request::Insert { timestamp, price }))
            }
            b'Q' => {
                let min_time = src.get_i32();
                let max_time = src.get_i32();
                Ok(Some(Request::Query { min_time, max_time }))
            }
            tag => anyhow::bail!("Invalid tag byte 0x{tag:02x}"),
        }
    }

    // A partial frame followed by EOF ends the session without a reply,
    // but is reported distinctly from a clean end of stream.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(request) => Ok(Some(request)),
            None if src.is_empty() => Ok(None),
            None => {
                let len = src.len();
                src.clear();
                anyhow::bail!("Truncated {len}-byte frame at end of stream")
            }
        }
    }
}
