//! The known-types registry.
//!
//! A [`TypeRegistry`] maps binary encoding ids to
//! [`EncodeableType`](crate::EncodeableType) descriptors so extension bodies
//! can be decoded without compile-time knowledge of the concrete type. A
//! registry is populated once during startup and treated as read-only
//! afterwards; decoding paths hold a `&'static` reference to it and never
//! mutate it.

use std::collections::HashMap;

use bytes::Buf;
use tracing::debug;

use crate::context::EncodingContext;
use crate::descriptor::EncodeableType;
use crate::encodeable::DynEncodeable;
use crate::error::{EncodingError, Result};

/// Lookup table from binary encoding id to type descriptor.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Vec<&'static EncodeableType>,
    by_binary_id: HashMap<u32, usize>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a descriptor table.
    ///
    /// Fails with [`EncodingError::DuplicateTypeId`] if two descriptors
    /// claim the same binary encoding id.
    pub fn from_types(types: &[&'static EncodeableType]) -> Result<Self> {
        let mut registry = Self::new();
        for ty in types.iter().copied() {
            registry.register(ty)?;
        }
        Ok(registry)
    }

    /// Add one descriptor.
    ///
    /// Registering the same binary encoding id twice is an error even if
    /// both registrations name the same descriptor.
    pub fn register(&mut self, ty: &'static EncodeableType) -> Result<()> {
        if self.by_binary_id.contains_key(&ty.binary_encoding_id) {
            return Err(EncodingError::DuplicateTypeId(ty.binary_encoding_id));
        }
        debug!(
            "registered encodeable type {} (type id {}, binary encoding id {})",
            ty.name, ty.type_id, ty.binary_encoding_id
        );
        self.by_binary_id
            .insert(ty.binary_encoding_id, self.types.len());
        self.types.push(ty);
        Ok(())
    }

    /// Look up a descriptor by its binary encoding id.
    pub fn find(&self, binary_encoding_id: u32) -> Option<&'static EncodeableType> {
        self.by_binary_id
            .get(&binary_encoding_id)
            .map(|&index| self.types[index])
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static EncodeableType> + '_ {
        self.types.iter().copied()
    }

    /// Decode one value of the type registered under `binary_encoding_id`.
    ///
    /// Fails with [`EncodingError::UnknownTypeId`] if nothing is registered
    /// under that id.
    pub fn decode_object(
        &self,
        binary_encoding_id: u32,
        buf: &mut dyn Buf,
        ctx: &EncodingContext,
    ) -> Result<Box<dyn DynEncodeable>> {
        let ty = self
            .find(binary_encoding_id)
            .ok_or(EncodingError::UnknownTypeId(binary_encoding_id))?;
        (ty.decode)(buf, ctx)
    }
}
