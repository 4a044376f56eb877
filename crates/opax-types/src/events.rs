//! Alarm events.

use opax_encoding::{encodeable_struct, DateTime, Guid};

use crate::ids;

encodeable_struct! {
    /// An alarm raised, cleared, or acknowledged on a signal.
    ///
    /// The same event id appears in every transition of one alarm, so a
    /// history service can thread raise, acknowledge, and clear together.
    pub struct AlarmEvent: (ids::ALARM_EVENT, ids::ALARM_EVENT_BINARY, ids::ALARM_EVENT_XML) {
        pub event_id: Guid,
        /// Signal the alarm condition is attached to.
        pub signal_id: u32,
        /// 1 (lowest) to 1000 (highest).
        pub severity: u16,
        pub active: bool,
        pub acknowledged: bool,
        /// Operator-facing description, for example `high level trip`.
        pub message: String,
        pub raised_at: DateTime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use opax_encoding::{Encodeable, EncodingContext};

    #[test]
    fn event_roundtrip() {
        let event = AlarmEvent {
            event_id: Guid::parse("0d9075c2-33d1-41f8-9f1a-4b7f0d2f30aa").unwrap(),
            signal_id: 14,
            severity: 900,
            active: true,
            acknowledged: false,
            message: "high level trip".into(),
            raised_at: DateTime::from_unix_micros(1_755_864_123_456_789),
        };

        let ctx = EncodingContext::new();
        let mut buf = BytesMut::new();
        event.encode(&mut buf, &ctx).unwrap();
        let decoded = AlarmEvent::decode(&mut buf.freeze(), &ctx).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn default_event_is_inactive() {
        let event = AlarmEvent::default();
        assert!(!event.active);
        assert!(!event.acknowledged);
        assert!(event.event_id.is_nil());
    }
}
