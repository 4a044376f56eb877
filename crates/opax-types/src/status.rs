//! Status codes reported with field telemetry.
//!
//! The generic `GOOD`, `UNCERTAIN`, and `BAD` codes live on
//! [`StatusCode`] itself; these are the conditions OPAX devices report.

use opax_encoding::StatusCode;

/// Value was clamped to the signal's engineering range.
pub const GOOD_CLAMPED: StatusCode = StatusCode(0x0000_0100);
/// Value comes from a local operator override, not the sensor.
pub const GOOD_LOCAL_OVERRIDE: StatusCode = StatusCode(0x0000_0200);

/// Last known value, sampling has stopped updating it.
pub const UNCERTAIN_STALE: StatusCode = StatusCode(0x4000_0100);
/// Substitute value configured for sensor maintenance windows.
pub const UNCERTAIN_SUBSTITUTE: StatusCode = StatusCode(0x4000_0200);
/// Sensor is overdue for calibration.
pub const UNCERTAIN_CALIBRATION_DUE: StatusCode = StatusCode(0x4000_0300);

/// Sensor hardware reported a failure.
pub const BAD_SENSOR_FAILURE: StatusCode = StatusCode(0x8000_0100);
/// The owning device is offline.
pub const BAD_DEVICE_OFFLINE: StatusCode = StatusCode(0x8000_0200);
/// The referenced signal id is not configured on the device.
pub const BAD_SIGNAL_UNKNOWN: StatusCode = StatusCode(0x8000_0300);
/// The signal exists but has not been sampled yet.
pub const BAD_NOT_SAMPLED: StatusCode = StatusCode(0x8000_0400);
