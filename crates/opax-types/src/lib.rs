//! Built-in OPAX encodeable types.
//!
//! The types a minimal OPAX device or collector needs: device and signal
//! description, telemetry samples, and alarm events. Every composite here is
//! declared with [`encodeable_struct!`](opax_encoding::encodeable_struct),
//! so each carries its full lifecycle and a static descriptor, and all of
//! them are listed in [`KNOWN_TYPES`] for registry-driven decoding.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use opax_encoding::{DateTime, Encodeable, StatusCode};
//! use opax_types::{table, AnalogValue, SampleBatch, SampleRecord};
//!
//! # fn main() -> opax_encoding::Result<()> {
//! let batch = SampleBatch {
//!     sequence: 1,
//!     samples: vec![SampleRecord::analog(
//!         7,
//!         AnalogValue::new(21.5, StatusCode::GOOD, DateTime::now()),
//!     )],
//!     ..SampleBatch::default()
//! };
//!
//! let ctx = table::default_context();
//! let mut buf = BytesMut::new();
//! batch.encode(&mut buf, &ctx)?;
//!
//! let decoded = SampleBatch::decode(&mut buf.freeze(), &ctx)?;
//! assert_eq!(decoded, batch);
//! # Ok(())
//! # }
//! ```

pub mod ids;
pub mod status;
pub mod table;

mod device;
mod enums;
mod events;
mod telemetry;

pub use device::{DeviceDescriptor, SignalDescriptor, SignalRange};
pub use enums::{DeviceState, SampleMode, SignalKind};
pub use events::AlarmEvent;
pub use table::KNOWN_TYPES;
pub use telemetry::{AnalogValue, DiscreteValue, SampleBatch, SampleRecord};
