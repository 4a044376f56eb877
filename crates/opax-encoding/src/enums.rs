//! Enumerated values.
//!
//! OPAX enumerations travel as plain little-endian `i32`. They are open:
//! the decoder performs no range check, so a value added by a newer peer
//! passes through older stacks intact instead of failing the containing
//! message. [`encodeable_enum!`] therefore declares an enumeration as a
//! transparent `i32` newtype with named constants rather than a Rust `enum`.

/// Declare an OPAX enumeration.
///
/// The first declared constant should carry the value `0`; it is what
/// [`Default`] and `clear` produce.
///
/// # Examples
///
/// ```
/// use opax_encoding::encodeable_enum;
///
/// encodeable_enum! {
///     /// Link state of a transport endpoint.
///     pub struct LinkState(i32) {
///         DOWN = 0,
///         UP = 1,
///         DEGRADED = 2,
///     }
/// }
///
/// assert_eq!(LinkState::default(), LinkState::DOWN);
/// assert_eq!(LinkState::UP.value(), 1);
/// assert_eq!(LinkState(7).name(), None);
/// ```
#[macro_export]
macro_rules! encodeable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident(i32) {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name(pub i32);

        impl $name {
            $( $(#[$vmeta])* pub const $variant: Self = Self($value); )+

            /// Raw wire value.
            pub const fn value(self) -> i32 {
                self.0
            }

            /// Name of the matching declared constant, if any.
            pub fn name(self) -> ::core::option::Option<&'static str> {
                $(
                    if self.0 == $value {
                        return ::core::option::Option::Some(stringify!($variant));
                    }
                )+
                ::core::option::Option::None
            }
        }

        impl ::core::convert::From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    ::core::option::Option::Some(name) => f.write_str(name),
                    ::core::option::Option::None => ::core::write!(f, "{}", self.0),
                }
            }
        }

        impl $crate::Encodeable for $name {
            fn clear(&mut self) {
                *self = <Self as ::core::default::Default>::default();
            }

            fn encode<B: $crate::bytes::BufMut>(
                &self,
                buf: &mut B,
                ctx: &$crate::EncodingContext,
            ) -> $crate::Result<()> {
                $crate::Encodeable::encode(&self.0, buf, ctx)
            }

            fn decode<B: $crate::bytes::Buf>(
                buf: &mut B,
                ctx: &$crate::EncodingContext,
            ) -> $crate::Result<Self> {
                ::core::result::Result::Ok(Self(<i32 as $crate::Encodeable>::decode(buf, ctx)?))
            }
        }
    };
}
