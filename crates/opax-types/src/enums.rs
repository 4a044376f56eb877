//! Enumerations shared by the built-in types.

use opax_encoding::encodeable_enum;

encodeable_enum! {
    /// Operating state reported by a field device.
    pub struct DeviceState(i32) {
        /// The device has not reported yet.
        UNKNOWN = 0,
        /// Running and sampling normally.
        OPERATIONAL = 1,
        /// Running with reduced capability, for example one failed sensor.
        DEGRADED = 2,
        /// A fault stops the device from sampling.
        FAULTED = 3,
        /// The device is deliberately out of service.
        OFFLINE = 4,
    }
}

encodeable_enum! {
    /// What a signal measures.
    pub struct SignalKind(i32) {
        /// Continuous value such as a temperature or pressure.
        ANALOG = 0,
        /// Two-state or multi-state value such as a valve position.
        DISCRETE = 1,
        /// Monotonic counter such as a flow totalizer.
        COUNTER = 2,
        /// Free-form text such as a batch label.
        TEXT = 3,
    }
}

encodeable_enum! {
    /// How a signal is sampled.
    pub struct SampleMode(i32) {
        /// Sampled when a collector asks.
        POLLED = 0,
        /// Reported when the value changes beyond its deadband.
        ON_CHANGE = 1,
        /// Reported on a fixed interval.
        PERIODIC = 2,
    }
}
