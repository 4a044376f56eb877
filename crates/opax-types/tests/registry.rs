//! Registry-driven decoding agrees with direct decoding.

use bytes::{Buf, BytesMut};
use opax_encoding::{Encodeable, EncodingContext};
use opax_types::table::{default_context, default_registry};
use opax_types::{AnalogValue, SampleBatch, SampleRecord, KNOWN_TYPES};

#[test]
fn every_known_type_roundtrips_through_erased_ops() {
    let ctx = default_context();
    for ty in KNOWN_TYPES {
        let fresh = (ty.initialize)();
        assert_eq!(fresh.descriptor().binary_encoding_id, ty.binary_encoding_id);

        let mut buf = BytesMut::new();
        fresh.dyn_encode(&mut buf, &ctx).unwrap();

        let mut wire = buf.freeze();
        let decoded = default_registry()
            .decode_object(ty.binary_encoding_id, &mut wire, &ctx)
            .unwrap();
        assert!(
            decoded.dyn_eq(fresh.as_ref()),
            "{} default value did not roundtrip",
            ty.name
        );
        assert_eq!(wire.remaining(), 0, "{} left bytes behind", ty.name);
    }
}

#[test]
fn registry_decode_matches_direct_decode() {
    let ctx = default_context();
    let batch = SampleBatch {
        sequence: 77,
        samples: vec![SampleRecord::analog(
            3,
            AnalogValue::new(12.25, opax_encoding::StatusCode::GOOD, Default::default()),
        )],
        ..SampleBatch::default()
    };

    let mut buf = BytesMut::new();
    batch.encode(&mut buf, &ctx).unwrap();
    let wire = buf.freeze();

    let direct = SampleBatch::decode(&mut wire.clone(), &ctx).unwrap();
    let erased = default_registry()
        .decode_object(opax_types::ids::SAMPLE_BATCH_BINARY, &mut wire.clone(), &ctx)
        .unwrap();

    assert_eq!(direct, batch);
    assert!(erased.dyn_eq(&direct));
    assert_eq!(
        erased.as_any().downcast_ref::<SampleBatch>(),
        Some(&direct)
    );
}

#[test]
fn registry_is_shared_and_stable() {
    let a = default_registry() as *const _;
    let b = default_registry() as *const _;
    assert_eq!(a, b);
    assert_eq!(default_registry().len(), KNOWN_TYPES.len());
}

#[test]
fn context_without_registry_still_decodes_composites() {
    // Only extension bodies need the registry; plain composites do not.
    let plain = EncodingContext::new();
    let device = opax_types::DeviceDescriptor {
        name: "relay".into(),
        ..Default::default()
    };
    let mut buf = BytesMut::new();
    device.encode(&mut buf, &plain).unwrap();
    let decoded = opax_types::DeviceDescriptor::decode(&mut buf.freeze(), &plain).unwrap();
    assert_eq!(decoded, device);
}
