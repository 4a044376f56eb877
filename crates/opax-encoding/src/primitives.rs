//! Scalar OPAX types.
//!
//! All scalars encode little-endian with no alignment or padding:
//!
//! | Type       | Wire size | Notes                                  |
//! |------------|-----------|----------------------------------------|
//! | `bool`     | 1         | zero is false, any other value is true |
//! | `u8`/`i8`  | 1         |                                        |
//! | `u16`/`i16`| 2         |                                        |
//! | `u32`/`i32`| 4         |                                        |
//! | `u64`/`i64`| 8         |                                        |
//! | `f32`      | 4         | IEEE 754 binary32                      |
//! | `f64`      | 8         | IEEE 754 binary64                      |
//! | [`Guid`]   | 16        | mixed-endian GUID layout               |
//! | [`DateTime`] | 8       | signed microseconds since Unix epoch   |
//! | [`StatusCode`] | 4     | severity in the top two bits           |

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::{Buf, BufMut};

use crate::context::EncodingContext;
use crate::encodeable::Encodeable;
use crate::error::{EncodingError, Result};

/// Implements [`Encodeable`] for a fixed-size numeric type.
macro_rules! impl_opax_primitive {
    ($ty:ty, $size:expr, $put:ident, $get:ident) => {
        impl Encodeable for $ty {
            fn clear(&mut self) {
                *self = <$ty>::default();
            }

            fn encode<B: BufMut>(&self, buf: &mut B, _ctx: &EncodingContext) -> Result<()> {
                buf.$put(*self);
                Ok(())
            }

            fn decode<B: Buf>(buf: &mut B, _ctx: &EncodingContext) -> Result<Self> {
                if buf.remaining() < $size {
                    return Err(EncodingError::BufferUnderflow {
                        needed: $size,
                        have: buf.remaining(),
                    });
                }
                Ok(buf.$get())
            }
        }
    };
}

impl_opax_primitive!(u8, 1, put_u8, get_u8);
impl_opax_primitive!(i8, 1, put_i8, get_i8);
impl_opax_primitive!(u16, 2, put_u16_le, get_u16_le);
impl_opax_primitive!(i16, 2, put_i16_le, get_i16_le);
impl_opax_primitive!(u32, 4, put_u32_le, get_u32_le);
impl_opax_primitive!(i32, 4, put_i32_le, get_i32_le);
impl_opax_primitive!(u64, 8, put_u64_le, get_u64_le);
impl_opax_primitive!(i64, 8, put_i64_le, get_i64_le);
impl_opax_primitive!(f32, 4, put_f32_le, get_f32_le);
impl_opax_primitive!(f64, 8, put_f64_le, get_f64_le);

impl Encodeable for bool {
    fn clear(&mut self) {
        *self = false;
    }

    fn encode<B: BufMut>(&self, buf: &mut B, _ctx: &EncodingContext) -> Result<()> {
        buf.put_u8(u8::from(*self));
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B, _ctx: &EncodingContext) -> Result<Self> {
        if buf.remaining() < 1 {
            return Err(EncodingError::BufferUnderflow {
                needed: 1,
                have: buf.remaining(),
            });
        }
        // Any nonzero octet decodes as true.
        Ok(buf.get_u8() != 0)
    }
}

/// A 16-byte globally unique identifier.
///
/// Uses the standard GUID field layout: the first three fields are
/// little-endian integers, the trailing eight bytes are in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// The all-zero GUID.
    pub const NIL: Guid = Guid {
        data1: 0,
        data2: 0,
        data3: 0,
        data4: [0; 8],
    };

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    pub const fn is_nil(&self) -> bool {
        self.data1 == 0
            && self.data2 == 0
            && self.data3 == 0
            && u64::from_ne_bytes(self.data4) == 0
    }

    /// Parse the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 36 {
            return None;
        }
        let mut parts = s.split('-');
        let data1 = u32::from_str_radix(parts.next()?, 16).ok()?;
        let data2 = u16::from_str_radix(parts.next()?, 16).ok()?;
        let data3 = u16::from_str_radix(parts.next()?, 16).ok()?;
        let clock = parts.next()?;
        let node = parts.next()?;
        if parts.next().is_some() || clock.len() != 4 || node.len() != 12 {
            return None;
        }
        let mut data4 = [0u8; 8];
        let clock = u16::from_str_radix(clock, 16).ok()?;
        data4[0] = (clock >> 8) as u8;
        data4[1] = clock as u8;
        for (i, byte) in data4[2..].iter_mut().enumerate() {
            *byte = u8::from_str_radix(node.get(i * 2..i * 2 + 2)?, 16).ok()?;
        }
        Some(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

impl Encodeable for Guid {
    fn clear(&mut self) {
        *self = Guid::NIL;
    }

    fn encode<B: BufMut>(&self, buf: &mut B, _ctx: &EncodingContext) -> Result<()> {
        buf.put_u32_le(self.data1);
        buf.put_u16_le(self.data2);
        buf.put_u16_le(self.data3);
        buf.put_slice(&self.data4);
        Ok(())
    }

    fn decode<B: Buf>(buf: &mut B, _ctx: &EncodingContext) -> Result<Self> {
        if buf.remaining() < 16 {
            return Err(EncodingError::BufferUnderflow {
                needed: 16,
                have: buf.remaining(),
            });
        }
        let data1 = buf.get_u32_le();
        let data2 = buf.get_u16_le();
        let data3 = buf.get_u16_le();
        let mut data4 = [0u8; 8];
        buf.copy_to_slice(&mut data4);
        Ok(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }
}

/// A point in time, as signed microseconds since the Unix epoch.
///
/// Encodes as a plain `i64`. The default value is the epoch itself, which
/// OPAX uses as the "no timestamp" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateTime(i64);

impl DateTime {
    /// The Unix epoch, also the "no timestamp" marker.
    pub const UNIX_EPOCH: DateTime = DateTime(0);

    pub const fn from_unix_micros(micros: i64) -> Self {
        Self(micros)
    }

    pub const fn unix_micros(&self) -> i64 {
        self.0
    }

    /// The current wall-clock time.
    ///
    /// Saturates at the representable range, roughly 292 thousand years
    /// either side of the epoch.
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => Self(i64::try_from(since.as_micros()).unwrap_or(i64::MAX)),
            Err(before) => Self(
                i64::try_from(before.duration().as_micros())
                    .map(i64::wrapping_neg)
                    .unwrap_or(i64::MIN),
            ),
        }
    }
}

impl Encodeable for DateTime {
    fn clear(&mut self) {
        *self = DateTime::UNIX_EPOCH;
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        self.0.encode(buf, ctx)
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        Ok(Self(i64::decode(buf, ctx)?))
    }
}

/// Quality of a reported value.
///
/// The top two bits carry the severity: `00` good, `01` uncertain, `10` bad,
/// `11` reserved. The remaining bits identify the specific condition.
/// Decoding accepts any 32-bit value, including codes this build does not
/// know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(pub u32);

impl StatusCode {
    /// Severity field mask.
    pub const SEVERITY_MASK: u32 = 0xC000_0000;
    /// Severity value: the reported value is usable.
    pub const SEVERITY_GOOD: u32 = 0x0000_0000;
    /// Severity value: the reported value may be usable.
    pub const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
    /// Severity value: the reported value is not usable.
    pub const SEVERITY_BAD: u32 = 0x8000_0000;

    /// Generic good status.
    pub const GOOD: StatusCode = StatusCode(Self::SEVERITY_GOOD);
    /// Generic uncertain status.
    pub const UNCERTAIN: StatusCode = StatusCode(Self::SEVERITY_UNCERTAIN);
    /// Generic bad status.
    pub const BAD: StatusCode = StatusCode(Self::SEVERITY_BAD);

    pub const fn is_good(&self) -> bool {
        self.0 & Self::SEVERITY_MASK == Self::SEVERITY_GOOD
    }

    pub const fn is_uncertain(&self) -> bool {
        self.0 & Self::SEVERITY_MASK == Self::SEVERITY_UNCERTAIN
    }

    pub const fn is_bad(&self) -> bool {
        self.0 & Self::SEVERITY_MASK == Self::SEVERITY_BAD
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl Encodeable for StatusCode {
    fn clear(&mut self) {
        *self = StatusCode::GOOD;
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        self.0.encode(buf, ctx)
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        Ok(Self(u32::decode(buf, ctx)?))
    }
}
