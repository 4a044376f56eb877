//! The built-in type table and the process-wide registry over it.

use std::sync::OnceLock;

use opax_encoding::{EncodeableObject, EncodeableType, EncodingContext, TypeRegistry};

use crate::device::{DeviceDescriptor, SignalDescriptor, SignalRange};
use crate::events::AlarmEvent;
use crate::telemetry::{AnalogValue, DiscreteValue, SampleBatch, SampleRecord};

/// Descriptors of every type this crate defines.
///
/// The order matches the id blocks in [`crate::ids`].
pub static KNOWN_TYPES: &[&EncodeableType] = &[
    SignalRange::DESCRIPTOR,
    AnalogValue::DESCRIPTOR,
    DiscreteValue::DESCRIPTOR,
    SignalDescriptor::DESCRIPTOR,
    DeviceDescriptor::DESCRIPTOR,
    SampleRecord::DESCRIPTOR,
    SampleBatch::DESCRIPTOR,
    AlarmEvent::DESCRIPTOR,
];

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// The process-wide registry holding [`KNOWN_TYPES`].
///
/// Built on first use and read-only afterwards. Stacks that add their own
/// types build a [`TypeRegistry`] of their own instead.
pub fn default_registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(|| {
        TypeRegistry::from_types(KNOWN_TYPES)
            .expect("the built-in type table has unique encoding ids")
    })
}

/// An [`EncodingContext`] with default limits and the default registry.
pub fn default_context() -> EncodingContext {
    EncodingContext::new().with_registry(default_registry())
}
