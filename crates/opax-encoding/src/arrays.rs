//! Variable-length arrays.
//!
//! `Vec<T>` encodes as a signed 32-bit element count followed by the
//! elements back to back, each in its own wire form. There is no padding
//! between elements and no terminator. A count less than or equal to zero
//! decodes as the empty vector.
//!
//! Element failures abort the whole array: if element `k` fails to decode,
//! the partial vector is dropped and the error is returned as the array's
//! result.

use bytes::{Buf, BufMut};

use crate::context::EncodingContext;
use crate::count::{read_count, write_count};
use crate::encodeable::Encodeable;
use crate::error::{EncodingError, Result};

impl<T: Encodeable> Encodeable for Vec<T> {
    fn clear(&mut self) {
        *self = Vec::new();
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        let limit = ctx.limits().max_array_length;
        if self.len() > limit {
            return Err(EncodingError::ArrayTooLong {
                length: self.len(),
                limit,
            });
        }
        write_count(buf, self.len())?;
        for element in self {
            element.encode(buf, ctx)?;
        }
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        let count = read_count(buf)?;
        let limit = ctx.limits().max_array_length;
        if count > limit {
            return Err(EncodingError::ArrayTooLong {
                length: count,
                limit,
            });
        }
        // Every element occupies at least one byte on the wire, so the
        // remaining input bounds how much is worth reserving up front.
        let mut elements = Vec::with_capacity(count.min(buf.remaining()));
        for _ in 0..count {
            elements.push(T::decode(buf, ctx)?);
        }
        Ok(elements)
    }
}
