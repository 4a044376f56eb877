//! Encode a telemetry batch, decode it back, and print the samples.
//!
//! Run with: cargo run --example sample_batch

use bytes::BytesMut;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use opax_encoding::{DateTime, Encodeable, Guid, StatusCode};
use opax_types::{status, table, AnalogValue, DiscreteValue, SampleBatch, SampleRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let now = DateTime::now();
    let batch = SampleBatch {
        device_id: Guid::parse("91f7a2bc-24de-4b02-a1f9-6d7c30a87e55")
            .ok_or("bad device id literal")?,
        sequence: 1,
        samples: vec![
            SampleRecord::analog(1, AnalogValue::new(18.62, StatusCode::GOOD, now)),
            SampleRecord::analog(2, AnalogValue::new(77.1, status::UNCERTAIN_STALE, now)),
            SampleRecord::discrete(3, DiscreteValue::new(1, StatusCode::GOOD, now)),
        ],
    };

    let ctx = table::default_context();
    let mut buf = BytesMut::new();
    batch.encode(&mut buf, &ctx)?;
    info!(
        "encoded batch {} with {} samples into {} bytes",
        batch.sequence,
        batch.samples.len(),
        buf.len()
    );

    let decoded = SampleBatch::decode(&mut buf.freeze(), &ctx)?;
    for sample in &decoded.samples {
        if let Some(value) = sample.value.decoded_as::<AnalogValue>() {
            info!(
                "signal {}: {:.2} (status {})",
                sample.signal_id, value.value, value.status
            );
        } else if let Some(value) = sample.value.decoded_as::<DiscreteValue>() {
            info!(
                "signal {}: state {} (status {})",
                sample.signal_id, value.state, value.status
            );
        } else {
            info!("signal {}: unknown value type", sample.signal_id);
        }
    }

    Ok(())
}
