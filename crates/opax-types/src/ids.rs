//! Numeric identifiers of the built-in OPAX types.
//!
//! Each type owns a block of three consecutive ids: the type id, the binary
//! encoding id at `+1`, and the xml encoding id at `+2`. Ids below 100 are
//! reserved for the protocol itself; 9000 and up are never assigned here so
//! applications and tests can use them freely.

pub const SIGNAL_RANGE: u32 = 110;
pub const SIGNAL_RANGE_BINARY: u32 = 111;
pub const SIGNAL_RANGE_XML: u32 = 112;

pub const ANALOG_VALUE: u32 = 120;
pub const ANALOG_VALUE_BINARY: u32 = 121;
pub const ANALOG_VALUE_XML: u32 = 122;

pub const DISCRETE_VALUE: u32 = 130;
pub const DISCRETE_VALUE_BINARY: u32 = 131;
pub const DISCRETE_VALUE_XML: u32 = 132;

pub const SIGNAL_DESCRIPTOR: u32 = 140;
pub const SIGNAL_DESCRIPTOR_BINARY: u32 = 141;
pub const SIGNAL_DESCRIPTOR_XML: u32 = 142;

pub const DEVICE_DESCRIPTOR: u32 = 150;
pub const DEVICE_DESCRIPTOR_BINARY: u32 = 151;
pub const DEVICE_DESCRIPTOR_XML: u32 = 152;

pub const SAMPLE_RECORD: u32 = 160;
pub const SAMPLE_RECORD_BINARY: u32 = 161;
pub const SAMPLE_RECORD_XML: u32 = 162;

pub const SAMPLE_BATCH: u32 = 170;
pub const SAMPLE_BATCH_BINARY: u32 = 171;
pub const SAMPLE_BATCH_XML: u32 = 172;

pub const ALARM_EVENT: u32 = 180;
pub const ALARM_EVENT_BINARY: u32 = 181;
pub const ALARM_EVENT_XML: u32 = 182;
