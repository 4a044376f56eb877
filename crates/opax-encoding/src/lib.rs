//! OPAX binary encoding runtime.
//!
//! This crate implements the data-encoding layer of the OPAX protocol: the
//! encodeable type lifecycle, the scalar and compound wire codecs, static
//! type descriptors, and the registry that dispatches decoding of
//! type-tagged extension bodies.
//!
//! # Wire format
//!
//! Everything is little-endian with no alignment, padding, or per-field
//! tags. Strings, byte strings, and arrays open with a signed 32-bit count;
//! a count at or below zero means empty and no payload follows. Composite
//! types are simply their fields, in declaration order.
//!
//! # Lifecycle
//!
//! Every encodeable type supports four operations: initialize
//! ([`Default`]), [`clear`](Encodeable::clear), [`encode`](Encodeable::encode),
//! and [`decode`](Encodeable::decode). Composites run each operation over
//! their fields in order and the first field failure becomes the composite's
//! result. Use [`encodeable_struct!`] and [`encodeable_enum!`] to declare
//! types; hand-written impls are only needed for exotic layouts.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use opax_encoding::{
//!     encodeable_struct, Encodeable, EncodeableObject, EncodingContext, TypeRegistry,
//! };
//!
//! encodeable_struct! {
//!     /// Temperature report from one probe.
//!     pub struct ProbeReport: (4001, 4002, 4003) {
//!         pub probe_id: u32,
//!         pub celsius: f64,
//!     }
//! }
//!
//! # fn main() -> opax_encoding::Result<()> {
//! let report = ProbeReport { probe_id: 7, celsius: 21.5 };
//!
//! let ctx = EncodingContext::new();
//! let mut buf = BytesMut::new();
//! report.encode(&mut buf, &ctx)?;
//!
//! let decoded = ProbeReport::decode(&mut buf.freeze(), &ctx)?;
//! assert_eq!(decoded, report);
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(ProbeReport::DESCRIPTOR)?;
//! assert!(registry.find(4002).is_some());
//! # Ok(())
//! # }
//! ```

mod arrays;
mod composite;
mod context;
mod count;
mod descriptor;
mod encodeable;
mod enums;
mod error;
mod extension;
mod primitives;
mod registry;
mod strings;

pub use context::{
    EncodingContext, EncodingLimits, DEFAULT_MAX_ARRAY_LENGTH, DEFAULT_MAX_BYTE_STRING_LENGTH,
    DEFAULT_MAX_NESTING_DEPTH, DEFAULT_MAX_STRING_LENGTH,
};
pub use descriptor::{DecodeFn, EncodeableType, InitializeFn};
pub use encodeable::{DynEncodeable, Encodeable, EncodeableObject};
pub use error::{EncodingError, Result};
pub use extension::{ExtensionValue, ABSENT_ENCODING_ID};
pub use primitives::{DateTime, Guid, StatusCode};
pub use registry::TypeRegistry;
pub use strings::ByteString;

#[doc(hidden)]
pub use descriptor::{erased_decode, erased_initialize};

// Re-export bytes so declared types and call sites agree on buffer traits.
pub use bytes;
