//! Type descriptors.
//!
//! An [`EncodeableType`] is the runtime identity card of an encodeable type:
//! its display name, the three numeric ids it is known by, and erased entry
//! points for the operations a caller may need without knowing the concrete
//! Rust type. Descriptors are `'static` and built entirely at compile time;
//! the [`TypeRegistry`](crate::TypeRegistry) holds references to them and
//! never owns or mutates one.

use bytes::Buf;

use crate::context::EncodingContext;
use crate::encodeable::{DynEncodeable, EncodeableObject};
use crate::error::Result;

/// Erased constructor: build a fresh default value of the described type.
pub type InitializeFn = fn() -> Box<dyn DynEncodeable>;

/// Erased decoder: read one value of the described type from a buffer.
pub type DecodeFn = fn(&mut dyn Buf, &EncodingContext) -> Result<Box<dyn DynEncodeable>>;

/// Compile-time descriptor for one encodeable type.
///
/// The three ids identify the type itself and its two encodings. OPAX only
/// transports the binary encoding, so the binary encoding id is the dispatch
/// key everywhere; the xml encoding id is carried for completeness and is
/// not used by this crate.
#[derive(Debug)]
pub struct EncodeableType {
    /// Display name, used in logs and diagnostics only.
    pub name: &'static str,
    /// Id of the abstract type.
    pub type_id: u32,
    /// Id tagging the binary encoding of the type on the wire.
    pub binary_encoding_id: u32,
    /// Id of the xml encoding of the type. Never sent by this stack.
    pub xml_encoding_id: u32,
    /// In-memory size of the concrete Rust value, in bytes.
    pub value_size: usize,
    /// Build a fresh default value of this type.
    pub initialize: InitializeFn,
    /// Decode one value of this type from a buffer.
    pub decode: DecodeFn,
}

/// [`InitializeFn`] instantiation for a concrete type.
///
/// Referenced by the [`encodeable_struct!`](crate::encodeable_struct)
/// expansion; not meant to be called directly.
pub fn erased_initialize<T: EncodeableObject>() -> Box<dyn DynEncodeable> {
    Box::new(T::default())
}

/// [`DecodeFn`] instantiation for a concrete type.
///
/// Referenced by the [`encodeable_struct!`](crate::encodeable_struct)
/// expansion; not meant to be called directly.
pub fn erased_decode<T: EncodeableObject>(
    mut buf: &mut dyn Buf,
    ctx: &EncodingContext,
) -> Result<Box<dyn DynEncodeable>> {
    let value = T::decode(&mut buf, ctx)?;
    Ok(Box::new(value))
}
