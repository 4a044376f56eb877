//! Signed 32-bit count prefixes.
//!
//! Strings, byte strings, and arrays all open with the same prefix: a
//! little-endian `i32` giving the element count. On decode, any count less
//! than or equal to zero means the value is empty and no payload follows.
//! Encoders here never write a negative count; an empty value always goes
//! out as count zero.

use bytes::{Buf, BufMut};

use crate::error::{EncodingError, Result};

/// Write a count prefix for `len` elements.
pub(crate) fn write_count<B: BufMut>(buf: &mut B, len: usize) -> Result<()> {
    let count = i32::try_from(len).map_err(|_| EncodingError::LengthOverflow { length: len })?;
    buf.put_i32_le(count);
    Ok(())
}

/// Read a count prefix, collapsing absent (negative) to empty.
pub(crate) fn read_count<B: Buf>(buf: &mut B) -> Result<usize> {
    if buf.remaining() < 4 {
        return Err(EncodingError::BufferUnderflow {
            needed: 4,
            have: buf.remaining(),
        });
    }
    let count = buf.get_i32_le();
    if count <= 0 {
        Ok(0)
    } else {
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn roundtrip() {
        let mut buf = BytesMut::new();
        write_count(&mut buf, 7).unwrap();
        assert_eq!(buf.as_ref(), &[7, 0, 0, 0]);
        assert_eq!(read_count(&mut buf.freeze()).unwrap(), 7);
    }

    #[test]
    fn negative_counts_collapse_to_empty() {
        for raw in [-1i32, -2, i32::MIN] {
            let mut buf = BytesMut::new();
            buf.put_i32_le(raw);
            assert_eq!(read_count(&mut buf.freeze()).unwrap(), 0);
        }
    }

    #[test]
    fn oversized_length_is_rejected() {
        let mut buf = BytesMut::new();
        let err = write_count(&mut buf, i32::MAX as usize + 1).unwrap_err();
        assert!(matches!(err, EncodingError::LengthOverflow { .. }));
    }

    #[test]
    fn truncated_prefix_underflows() {
        let mut buf = &[1u8, 0][..];
        assert!(matches!(
            read_count(&mut buf).unwrap_err(),
            EncodingError::BufferUnderflow { needed: 4, have: 2 }
        ));
    }
}
