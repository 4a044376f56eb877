//! Telemetry sample types.
//!
//! Samples travel in batches. Each [`SampleRecord`] names the signal it
//! belongs to and carries the measured value as an extension body, so one
//! batch can mix analog and discrete samples and future value types pass
//! through collectors that do not know them.

use opax_encoding::{encodeable_struct, DateTime, ExtensionValue, Guid, StatusCode};

use crate::ids;

encodeable_struct! {
    /// A measured analog value with quality and source time.
    pub struct AnalogValue: (ids::ANALOG_VALUE, ids::ANALOG_VALUE_BINARY, ids::ANALOG_VALUE_XML) {
        pub value: f64,
        pub status: StatusCode,
        /// When the device sampled the value, not when it was transmitted.
        pub source_timestamp: DateTime,
    }
}

impl AnalogValue {
    pub fn new(value: f64, status: StatusCode, source_timestamp: DateTime) -> Self {
        Self {
            value,
            status,
            source_timestamp,
        }
    }
}

encodeable_struct! {
    /// A measured discrete state with quality and source time.
    pub struct DiscreteValue: (ids::DISCRETE_VALUE, ids::DISCRETE_VALUE_BINARY, ids::DISCRETE_VALUE_XML) {
        /// Raw state number; the signal's catalog entry gives it meaning.
        pub state: i32,
        pub status: StatusCode,
        pub source_timestamp: DateTime,
    }
}

impl DiscreteValue {
    pub fn new(state: i32, status: StatusCode, source_timestamp: DateTime) -> Self {
        Self {
            state,
            status,
            source_timestamp,
        }
    }
}

encodeable_struct! {
    /// One sample of one signal.
    pub struct SampleRecord: (ids::SAMPLE_RECORD, ids::SAMPLE_RECORD_BINARY, ids::SAMPLE_RECORD_XML) {
        /// Signal id from the device's catalog.
        pub signal_id: u32,
        /// The sampled value, typically an [`AnalogValue`] or [`DiscreteValue`].
        pub value: ExtensionValue,
    }
}

impl SampleRecord {
    /// Record an analog sample.
    pub fn analog(signal_id: u32, value: AnalogValue) -> Self {
        Self {
            signal_id,
            value: ExtensionValue::new(value),
        }
    }

    /// Record a discrete sample.
    pub fn discrete(signal_id: u32, value: DiscreteValue) -> Self {
        Self {
            signal_id,
            value: ExtensionValue::new(value),
        }
    }
}

encodeable_struct! {
    /// A device's samples for one reporting interval.
    pub struct SampleBatch: (ids::SAMPLE_BATCH, ids::SAMPLE_BATCH_BINARY, ids::SAMPLE_BATCH_XML) {
        pub device_id: Guid,
        /// Increments by one per batch; collectors use it to spot gaps.
        pub sequence: u32,
        pub samples: Vec<SampleRecord>,
    }
}
