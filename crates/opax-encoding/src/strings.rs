//! String and byte string types.
//!
//! Both encode as a signed 32-bit count followed by that many bytes. Strings
//! carry UTF-8 and fail to decode on anything else; byte strings carry raw
//! octets. A negative count on the wire decodes as the empty value.

use bytes::{Buf, BufMut};

use crate::context::EncodingContext;
use crate::count::{read_count, write_count};
use crate::encodeable::Encodeable;
use crate::error::{EncodingError, Result};

impl Encodeable for String {
    fn clear(&mut self) {
        *self = String::new();
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        let limit = ctx.limits().max_string_length;
        if self.len() > limit {
            return Err(EncodingError::StringTooLong {
                length: self.len(),
                limit,
            });
        }
        write_count(buf, self.len())?;
        buf.put_slice(self.as_bytes());
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        let length = read_count(buf)?;
        let limit = ctx.limits().max_string_length;
        if length > limit {
            return Err(EncodingError::StringTooLong { length, limit });
        }
        if buf.remaining() < length {
            return Err(EncodingError::BufferUnderflow {
                needed: length,
                have: buf.remaining(),
            });
        }
        let mut raw = vec![0u8; length];
        buf.copy_to_slice(&mut raw);
        Ok(String::from_utf8(raw)?)
    }
}

/// An opaque run of octets.
///
/// Distinct from `Vec<u8>` so that firmware images, certificate blobs and
/// similar payloads are bounded by the byte string limit rather than the
/// array element limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Encodeable for ByteString {
    fn clear(&mut self) {
        *self = ByteString::new();
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        let limit = ctx.limits().max_byte_string_length;
        if self.len() > limit {
            return Err(EncodingError::ByteStringTooLong {
                length: self.len(),
                limit,
            });
        }
        write_count(buf, self.len())?;
        buf.put_slice(&self.0);
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        let length = read_count(buf)?;
        let limit = ctx.limits().max_byte_string_length;
        if length > limit {
            return Err(EncodingError::ByteStringTooLong { length, limit });
        }
        if buf.remaining() < length {
            return Err(EncodingError::BufferUnderflow {
                needed: length,
                have: buf.remaining(),
            });
        }
        let mut raw = vec![0u8; length];
        buf.copy_to_slice(&mut raw);
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EncodingLimits;
    use bytes::BytesMut;

    fn ctx() -> EncodingContext {
        EncodingContext::new()
    }

    #[test]
    fn string_wire_form() {
        let mut buf = BytesMut::new();
        "ab".to_string().encode(&mut buf, &ctx()).unwrap();
        assert_eq!(buf.as_ref(), &[2, 0, 0, 0, b'a', b'b']);
    }

    #[test]
    fn empty_string_is_count_zero() {
        let mut buf = BytesMut::new();
        String::new().encode(&mut buf, &ctx()).unwrap();
        assert_eq!(buf.as_ref(), &[0, 0, 0, 0]);
        assert_eq!(String::decode(&mut buf.freeze(), &ctx()).unwrap(), "");
    }

    #[test]
    fn negative_count_decodes_as_empty() {
        let mut buf = BytesMut::new();
        buf.put_i32_le(-1);
        assert_eq!(String::decode(&mut buf.freeze(), &ctx()).unwrap(), "");
    }

    #[test]
    fn unicode_roundtrip() {
        let text = "täst °C µ".to_string();
        let mut buf = BytesMut::new();
        text.encode(&mut buf, &ctx()).unwrap();
        assert_eq!(String::decode(&mut buf.freeze(), &ctx()).unwrap(), text);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut buf = BytesMut::new();
        buf.put_i32_le(2);
        buf.put_slice(&[0xFF, 0xFE]);
        assert!(matches!(
            String::decode(&mut buf.freeze(), &ctx()).unwrap_err(),
            EncodingError::InvalidUtf8(_)
        ));
    }

    #[test]
    fn string_limit_enforced_both_ways() {
        let limits = EncodingLimits {
            max_string_length: 4,
            ..EncodingLimits::default()
        };
        let small = EncodingContext::with_limits(limits);

        let mut buf = BytesMut::new();
        let err = "too long".to_string().encode(&mut buf, &small).unwrap_err();
        assert!(matches!(err, EncodingError::StringTooLong { limit: 4, .. }));

        let mut buf = BytesMut::new();
        "too long".to_string().encode(&mut buf, &ctx()).unwrap();
        let err = String::decode(&mut buf.freeze(), &small).unwrap_err();
        assert!(matches!(err, EncodingError::StringTooLong { limit: 4, .. }));
    }

    #[test]
    fn truncated_payload_underflows() {
        let mut buf = BytesMut::new();
        buf.put_i32_le(10);
        buf.put_slice(b"abc");
        assert!(matches!(
            String::decode(&mut buf.freeze(), &ctx()).unwrap_err(),
            EncodingError::BufferUnderflow {
                needed: 10,
                have: 3
            }
        ));
    }

    #[test]
    fn byte_string_roundtrip() {
        let bs = ByteString::from(&[0u8, 1, 2, 0xFF][..]);
        let mut buf = BytesMut::new();
        bs.encode(&mut buf, &ctx()).unwrap();
        assert_eq!(buf.as_ref(), &[4, 0, 0, 0, 0, 1, 2, 0xFF]);
        assert_eq!(ByteString::decode(&mut buf.freeze(), &ctx()).unwrap(), bs);
    }

    #[test]
    fn byte_string_clear_is_idempotent() {
        let mut bs = ByteString::from(vec![1, 2, 3]);
        bs.clear();
        assert_eq!(bs, ByteString::default());
        bs.clear();
        assert_eq!(bs, ByteString::default());
    }

    #[test]
    fn byte_string_limit() {
        let limits = EncodingLimits {
            max_byte_string_length: 2,
            ..EncodingLimits::default()
        };
        let small = EncodingContext::with_limits(limits);
        let mut buf = BytesMut::new();
        let err = ByteString::from(vec![1, 2, 3])
            .encode(&mut buf, &small)
            .unwrap_err();
        assert!(matches!(
            err,
            EncodingError::ByteStringTooLong { length: 3, limit: 2 }
        ));
    }
}
