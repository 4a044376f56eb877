//! Extension values: type-tagged polymorphic payloads.
//!
//! An [`ExtensionValue`] carries any registered encodeable type through a
//! field whose concrete type is not fixed at compile time. On the wire it is
//! a `u32` binary encoding id, then a signed 32-bit body length, then the
//! body bytes. Id zero means no value is present and nothing follows it.
//!
//! Decoding resolves the id against the registry on the
//! [`EncodingContext`]. A known id decodes the body into the concrete type;
//! an unknown id, or a context without a registry, keeps the body as opaque
//! bytes so the value survives re-encoding unchanged through a stack that
//! does not know the type.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::context::EncodingContext;
use crate::count::write_count;
use crate::encodeable::{DynEncodeable, Encodeable, EncodeableObject};
use crate::error::{EncodingError, Result};

/// Id marking an absent extension value on the wire.
pub const ABSENT_ENCODING_ID: u32 = 0;

/// A polymorphic, type-tagged value.
#[derive(Debug, Clone)]
pub enum ExtensionValue {
    /// No value present.
    Absent,
    /// A decoded value of a registered type.
    Decoded(Box<dyn DynEncodeable>),
    /// A body whose type this stack does not know, kept verbatim.
    Opaque {
        binary_encoding_id: u32,
        body: Bytes,
    },
}

impl ExtensionValue {
    /// Wrap a concrete value.
    pub fn new<T: EncodeableObject>(value: T) -> Self {
        Self::Decoded(Box::new(value))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The binary encoding id this value is tagged with, if present.
    pub fn binary_encoding_id(&self) -> Option<u32> {
        match self {
            Self::Absent => None,
            Self::Decoded(value) => Some(value.descriptor().binary_encoding_id),
            Self::Opaque {
                binary_encoding_id, ..
            } => Some(*binary_encoding_id),
        }
    }

    /// Borrow the decoded value as a concrete type.
    ///
    /// Returns `None` when absent, opaque, or of a different type.
    pub fn decoded_as<T: EncodeableObject>(&self) -> Option<&T> {
        match self {
            Self::Decoded(value) => value.as_any().downcast_ref(),
            _ => None,
        }
    }
}

impl Default for ExtensionValue {
    fn default() -> Self {
        Self::Absent
    }
}

impl PartialEq for ExtensionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Decoded(lhs), Self::Decoded(rhs)) => lhs.dyn_eq(rhs.as_ref()),
            (
                Self::Opaque {
                    binary_encoding_id: lhs_id,
                    body: lhs_body,
                },
                Self::Opaque {
                    binary_encoding_id: rhs_id,
                    body: rhs_body,
                },
            ) => lhs_id == rhs_id && lhs_body == rhs_body,
            _ => false,
        }
    }
}

impl Encodeable for ExtensionValue {
    fn clear(&mut self) {
        *self = Self::Absent;
    }

    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()> {
        match self {
            Self::Absent => {
                buf.put_u32_le(ABSENT_ENCODING_ID);
                Ok(())
            }
            Self::Decoded(value) => {
                let mut body = BytesMut::new();
                value.dyn_encode(&mut body, ctx)?;
                buf.put_u32_le(value.descriptor().binary_encoding_id);
                write_count(buf, body.len())?;
                buf.put_slice(&body);
                Ok(())
            }
            Self::Opaque {
                binary_encoding_id,
                body,
            } => {
                buf.put_u32_le(*binary_encoding_id);
                write_count(buf, body.len())?;
                buf.put_slice(body);
                Ok(())
            }
        }
    }

    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self> {
        if buf.remaining() < 4 {
            return Err(EncodingError::BufferUnderflow {
                needed: 4,
                have: buf.remaining(),
            });
        }
        let binary_encoding_id = buf.get_u32_le();
        if binary_encoding_id == ABSENT_ENCODING_ID {
            return Ok(Self::Absent);
        }

        if buf.remaining() < 4 {
            return Err(EncodingError::BufferUnderflow {
                needed: 4,
                have: buf.remaining(),
            });
        }
        let declared = buf.get_i32_le();
        let declared = if declared <= 0 { 0 } else { declared as usize };
        if buf.remaining() < declared {
            return Err(EncodingError::BufferUnderflow {
                needed: declared,
                have: buf.remaining(),
            });
        }
        let body = buf.copy_to_bytes(declared);

        let descriptor = ctx
            .registry()
            .and_then(|registry| registry.find(binary_encoding_id));
        match descriptor {
            Some(ty) => {
                let child = ctx.descend()?;
                let mut body_buf = body;
                let value = (ty.decode)(&mut body_buf, &child)?;
                if body_buf.remaining() != 0 {
                    return Err(EncodingError::BodyLengthMismatch {
                        declared,
                        consumed: declared - body_buf.remaining(),
                    });
                }
                Ok(Self::Decoded(value))
            }
            None => {
                debug!(
                    "no encodeable type registered for binary encoding id {}, keeping {} byte body opaque",
                    binary_encoding_id, declared
                );
                Ok(Self::Opaque {
                    binary_encoding_id,
                    body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EncodingLimits;
    use crate::registry::TypeRegistry;
    use crate::encodeable_struct;

    encodeable_struct! {
        struct Payload: (9051, 9052, 9053) {
            level: u32,
            note: String,
        }
    }

    fn registry() -> &'static TypeRegistry {
        Box::leak(Box::new(
            TypeRegistry::from_types(&[Payload::DESCRIPTOR]).unwrap(),
        ))
    }

    fn sample() -> Payload {
        Payload {
            level: 4,
            note: "drum overfill".into(),
        }
    }

    #[test]
    fn absent_is_four_bytes() {
        let ctx = EncodingContext::new();
        let mut buf = BytesMut::new();
        ExtensionValue::Absent.encode(&mut buf, &ctx).unwrap();
        assert_eq!(buf.as_ref(), &[0, 0, 0, 0]);

        let decoded = ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap();
        assert!(decoded.is_absent());
        assert_eq!(decoded.binary_encoding_id(), None);
    }

    #[test]
    fn decoded_roundtrip_with_registry() {
        let ctx = EncodingContext::new().with_registry(registry());
        let value = ExtensionValue::new(sample());
        assert_eq!(value.binary_encoding_id(), Some(9052));

        let mut buf = BytesMut::new();
        value.encode(&mut buf, &ctx).unwrap();
        let decoded = ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.decoded_as::<Payload>(), Some(&sample()));
    }

    #[test]
    fn unknown_id_stays_opaque_and_reencodes_verbatim() {
        // Encode with the type known, decode without any registry.
        let ctx = EncodingContext::new();
        let mut buf = BytesMut::new();
        ExtensionValue::new(sample()).encode(&mut buf, &ctx).unwrap();
        let wire = buf.freeze();

        let opaque = ExtensionValue::decode(&mut wire.clone(), &ctx).unwrap();
        assert!(matches!(
            opaque,
            ExtensionValue::Opaque {
                binary_encoding_id: 9052,
                ..
            }
        ));
        assert!(opaque.decoded_as::<Payload>().is_none());

        let mut reencoded = BytesMut::new();
        opaque.encode(&mut reencoded, &ctx).unwrap();
        assert_eq!(reencoded.freeze(), wire);
    }

    #[test]
    fn opaque_resolves_once_registry_is_attached() {
        let plain = EncodingContext::new();
        let mut buf = BytesMut::new();
        ExtensionValue::new(sample()).encode(&mut buf, &plain).unwrap();
        let opaque = ExtensionValue::decode(&mut buf.clone().freeze(), &plain).unwrap();

        let mut reencoded = BytesMut::new();
        opaque.encode(&mut reencoded, &plain).unwrap();
        let resolved = ExtensionValue::decode(
            &mut reencoded.freeze(),
            &plain.with_registry(registry()),
        )
        .unwrap();
        assert_eq!(resolved.decoded_as::<Payload>(), Some(&sample()));
    }

    #[test]
    fn body_shorter_than_declared_underflows() {
        let ctx = EncodingContext::new();
        let mut buf = BytesMut::new();
        buf.put_u32_le(9052);
        buf.put_i32_le(10);
        buf.put_slice(&[1, 2, 3]);
        assert!(matches!(
            ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap_err(),
            EncodingError::BufferUnderflow {
                needed: 10,
                have: 3
            }
        ));
    }

    #[test]
    fn body_longer_than_the_type_is_a_mismatch() {
        let ctx = EncodingContext::new().with_registry(registry());
        let mut body = BytesMut::new();
        sample().encode(&mut body, &ctx).unwrap();
        body.put_u8(0xEE); // trailing garbage inside the declared body

        let mut buf = BytesMut::new();
        buf.put_u32_le(9052);
        buf.put_i32_le(body.len() as i32);
        buf.put_slice(&body);
        assert!(matches!(
            ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap_err(),
            EncodingError::BodyLengthMismatch { .. }
        ));
    }

    #[test]
    fn negative_body_length_reads_as_empty_body() {
        // An unknown id with a negative length decodes as an empty opaque body.
        let ctx = EncodingContext::new();
        let mut buf = BytesMut::new();
        buf.put_u32_le(31);
        buf.put_i32_le(-1);
        let decoded = ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap();
        match decoded {
            ExtensionValue::Opaque {
                binary_encoding_id,
                body,
            } => {
                assert_eq!(binary_encoding_id, 31);
                assert!(body.is_empty());
            }
            other => panic!("expected opaque, got {other:?}"),
        }
    }

    #[test]
    fn nesting_depth_is_bounded() {
        encodeable_struct! {
            struct Wrapper: (9061, 9062, 9063) {
                inner: ExtensionValue,
            }
        }
        let registry: &'static TypeRegistry = Box::leak(Box::new(
            TypeRegistry::from_types(&[Wrapper::DESCRIPTOR]).unwrap(),
        ));
        let limits = EncodingLimits {
            max_nesting_depth: 2,
            ..EncodingLimits::default()
        };
        let ctx = EncodingContext::with_limits(limits).with_registry(registry);

        // Three levels of wrapping exceed a budget of two.
        let nested = Wrapper {
            inner: ExtensionValue::new(Wrapper {
                inner: ExtensionValue::new(Wrapper {
                    inner: ExtensionValue::Absent,
                }),
            }),
        };
        let mut buf = BytesMut::new();
        ExtensionValue::new(nested).encode(&mut buf, &ctx).unwrap();
        assert!(matches!(
            ExtensionValue::decode(&mut buf.freeze(), &ctx).unwrap_err(),
            EncodingError::DepthLimitExceeded { limit: 2 }
        ));
    }

    #[test]
    fn clear_returns_to_absent() {
        let mut value = ExtensionValue::new(sample());
        value.clear();
        assert!(value.is_absent());
        assert_eq!(value, ExtensionValue::default());
    }
}
