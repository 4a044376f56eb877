//! Composite (structure) types.
//!
//! [`encodeable_struct!`] declares a struct together with its complete
//! encodeable lifecycle and static [`EncodeableType`](crate::EncodeableType)
//! descriptor. The declared field order is the wire order: encode writes the
//! fields back to back in declaration order with no padding or per-field
//! tags, and decode reads them back the same way.
//!
//! Field results aggregate into the composite's result. The first field that
//! fails to encode or decode aborts the remaining fields and its error
//! becomes the composite's error; on the decode path the already-built
//! fields are dropped, so a failed decode yields no partially-filled value.

/// Declare an OPAX composite type.
///
/// Takes the id triple `(type id, binary encoding id, xml encoding id)`
/// after the struct name, then the fields in wire order. Every field type
/// must itself implement [`Encodeable`](crate::Encodeable).
///
/// The expansion derives `Debug`, `Clone`, `PartialEq`, and `Default`, and
/// implements [`Encodeable`](crate::Encodeable) plus
/// [`EncodeableObject`](crate::EncodeableObject), so the type is ready to
/// register and to travel inside an
/// [`ExtensionValue`](crate::ExtensionValue).
///
/// # Examples
///
/// ```
/// use bytes::BytesMut;
/// use opax_encoding::{encodeable_struct, Encodeable, EncodingContext};
///
/// encodeable_struct! {
///     /// One calibration step.
///     pub struct CalibrationStep: (9101, 9102, 9103) {
///         pub setpoint: f64,
///         pub measured: f64,
///         pub within_tolerance: bool,
///     }
/// }
///
/// let step = CalibrationStep {
///     setpoint: 10.0,
///     measured: 10.02,
///     within_tolerance: true,
/// };
/// let ctx = EncodingContext::new();
/// let mut buf = BytesMut::new();
/// step.encode(&mut buf, &ctx).unwrap();
/// assert_eq!(CalibrationStep::decode(&mut buf.freeze(), &ctx).unwrap(), step);
/// ```
#[macro_export]
macro_rules! encodeable_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : ($type_id:expr, $binary_id:expr, $xml_id:expr) {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty, )+
        }

        impl $crate::Encodeable for $name {
            fn clear(&mut self) {
                $( $crate::Encodeable::clear(&mut self.$field); )+
            }

            fn encode<B: $crate::bytes::BufMut>(
                &self,
                buf: &mut B,
                ctx: &$crate::EncodingContext,
            ) -> $crate::Result<()> {
                $( $crate::Encodeable::encode(&self.$field, buf, ctx)?; )+
                ::core::result::Result::Ok(())
            }

            fn decode<B: $crate::bytes::Buf>(
                buf: &mut B,
                ctx: &$crate::EncodingContext,
            ) -> $crate::Result<Self> {
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::Encodeable::decode(buf, ctx)?, )+
                })
            }
        }

        impl $crate::EncodeableObject for $name {
            const DESCRIPTOR: &'static $crate::EncodeableType = &$crate::EncodeableType {
                name: stringify!($name),
                type_id: $type_id,
                binary_encoding_id: $binary_id,
                xml_encoding_id: $xml_id,
                value_size: ::core::mem::size_of::<$name>(),
                initialize: $crate::erased_initialize::<$name>,
                decode: $crate::erased_decode::<$name>,
            };
        }
    };
}
