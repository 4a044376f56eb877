//! Core traits for encodeable OPAX values.
//!
//! [`Encodeable`] is the statically-dispatched lifecycle every OPAX value
//! implements. [`EncodeableObject`] adds the compile-time type descriptor for
//! values that travel inside extension bodies. [`DynEncodeable`] is the
//! object-safe view used by the registry and by [`ExtensionValue`], where the
//! concrete type is only known at runtime.
//!
//! [`ExtensionValue`]: crate::ExtensionValue

use std::any::Any;
use std::fmt;

use bytes::{Buf, BufMut};

use crate::context::EncodingContext;
use crate::descriptor::EncodeableType;
use crate::error::Result;

/// A value with the OPAX encodeable lifecycle.
///
/// The lifecycle has four operations. Initialization is [`Default`]: a fresh
/// value is the all-defaults value. [`clear`](Encodeable::clear) returns a
/// value to that state in place and is idempotent. [`encode`](Encodeable::encode)
/// appends the little-endian wire form to a buffer;
/// [`decode`](Encodeable::decode) reads one back. Composite types run these
/// operations over their fields in declaration order, which is also wire
/// order, and the first field failure aborts the whole operation.
///
/// Decode builds a fresh value rather than filling one in, so a failed decode
/// leaves nothing behind: partially-decoded fields are dropped on the error
/// path.
///
/// # Examples
///
/// ```
/// use bytes::BytesMut;
/// use opax_encoding::{Encodeable, EncodingContext};
///
/// let ctx = EncodingContext::new();
/// let mut buf = BytesMut::new();
/// 42u32.encode(&mut buf, &ctx).unwrap();
/// assert_eq!(buf.as_ref(), &[42, 0, 0, 0]);
///
/// let decoded = u32::decode(&mut buf.freeze(), &ctx).unwrap();
/// assert_eq!(decoded, 42);
/// ```
pub trait Encodeable: Default + Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Reset the value to its initial (default) state in place.
    fn clear(&mut self);

    /// Append the wire form of `self` to `buf`.
    fn encode<B: BufMut>(&self, buf: &mut B, ctx: &EncodingContext) -> Result<()>;

    /// Read one value from the front of `buf`.
    fn decode<B: Buf>(buf: &mut B, ctx: &EncodingContext) -> Result<Self>
    where
        Self: Sized;
}

/// An encodeable value with a registered type identity.
///
/// Types declared through [`encodeable_struct!`](crate::encodeable_struct)
/// get this for free. The descriptor carries the numeric ids an
/// [`ExtensionValue`](crate::ExtensionValue) body is tagged with on the wire,
/// plus erased constructors for registry dispatch.
pub trait EncodeableObject: Encodeable {
    /// Static descriptor for this type.
    const DESCRIPTOR: &'static EncodeableType;
}

/// Object-safe view of an [`EncodeableObject`].
///
/// [`Encodeable`] itself is not object safe because its encode and decode
/// methods are generic over the buffer. This trait narrows them to
/// `dyn Buf` / `dyn BufMut` so descriptors and extension bodies can hold
/// `Box<dyn DynEncodeable>`. Every `EncodeableObject` implements it through
/// a blanket impl; there is never a reason to implement it by hand.
pub trait DynEncodeable: fmt::Debug + Send + Sync {
    /// Descriptor of the concrete type behind this object.
    fn descriptor(&self) -> &'static EncodeableType;

    /// [`Encodeable::clear`] through the erased view.
    fn dyn_clear(&mut self);

    /// [`Encodeable::encode`] through the erased view.
    fn dyn_encode(&self, buf: &mut dyn BufMut, ctx: &EncodingContext) -> Result<()>;

    /// Clone into a fresh box.
    fn dyn_clone(&self) -> Box<dyn DynEncodeable>;

    /// Compare with another erased value.
    ///
    /// Values of different concrete types are never equal.
    fn dyn_eq(&self, other: &dyn DynEncodeable) -> bool;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: EncodeableObject> DynEncodeable for T {
    fn descriptor(&self) -> &'static EncodeableType {
        T::DESCRIPTOR
    }

    fn dyn_clear(&mut self) {
        self.clear();
    }

    fn dyn_encode(&self, mut buf: &mut dyn BufMut, ctx: &EncodingContext) -> Result<()> {
        self.encode(&mut buf, ctx)
    }

    fn dyn_clone(&self) -> Box<dyn DynEncodeable> {
        Box::new(self.clone())
    }

    fn dyn_eq(&self, other: &dyn DynEncodeable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn DynEncodeable> {
    fn clone(&self) -> Self {
        self.as_ref().dyn_clone()
    }
}
