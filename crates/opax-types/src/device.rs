//! Device and signal description types.
//!
//! A [`DeviceDescriptor`] is the static self-description a device publishes
//! when it joins a network: identity, firmware, and the catalog of signals
//! it samples. Collectors decode it once and use the signal ids to interpret
//! the telemetry that follows.

use opax_encoding::encodeable_struct;

use crate::enums::{DeviceState, SampleMode, SignalKind};
use crate::ids;

encodeable_struct! {
    /// Inclusive engineering range of an analog signal.
    pub struct SignalRange: (ids::SIGNAL_RANGE, ids::SIGNAL_RANGE_BINARY, ids::SIGNAL_RANGE_XML) {
        pub low: f64,
        pub high: f64,
    }
}

impl SignalRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies inside the range.
    ///
    /// The default range is empty (both bounds zero), which contains
    /// nothing but zero itself.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

encodeable_struct! {
    /// One signal in a device's catalog.
    pub struct SignalDescriptor: (ids::SIGNAL_DESCRIPTOR, ids::SIGNAL_DESCRIPTOR_BINARY, ids::SIGNAL_DESCRIPTOR_XML) {
        /// Id the device tags samples of this signal with. Unique per device.
        pub signal_id: u32,
        /// Human-readable tag name, for example `FIC-101.PV`.
        pub name: String,
        pub kind: SignalKind,
        pub mode: SampleMode,
        /// Engineering unit, for example `°C`. Empty for unitless signals.
        pub unit: String,
        /// Engineering range. Meaningful for analog signals only.
        pub range: SignalRange,
        /// Free-form classification labels applied by the configurator.
        pub labels: Vec<String>,
    }
}

encodeable_struct! {
    /// A device's published self-description.
    pub struct DeviceDescriptor: (ids::DEVICE_DESCRIPTOR, ids::DEVICE_DESCRIPTOR_BINARY, ids::DEVICE_DESCRIPTOR_XML) {
        /// Stable identity across renames and firmware updates.
        pub device_id: opax_encoding::Guid,
        pub name: String,
        pub model: String,
        pub firmware: String,
        pub state: DeviceState,
        /// Catalog of the signals this device samples.
        pub signals: Vec<SignalDescriptor>,
    }
}

impl DeviceDescriptor {
    /// Look up a signal by its id.
    pub fn signal(&self, signal_id: u32) -> Option<&SignalDescriptor> {
        self.signals.iter().find(|s| s.signal_id == signal_id)
    }
}
