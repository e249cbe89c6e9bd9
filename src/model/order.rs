//! # Order Records & Outcomes
//!
//! The [`OrderRecord`] is ephemeral: exactly one exists per emitter cycle, its
//! fields are fully determined before the log line is written, and it never
//! outlives its cycle. The wire shape (camelCase field names, upper-case event
//! labels) is fixed by the serde attributes here, so the serializer output is
//! the single source of truth for the output format.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Smallest amount a synthetic order can carry.
pub const AMOUNT_MIN: u32 = 100;
/// Largest amount a synthetic order can carry (inclusive).
pub const AMOUNT_MAX: u32 = 5099;

/// Outcome label assigned to each synthetic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEvent {
    OrderSuccess,
    PaymentFailed,
    ProcessingDelay,
    DuplicateOrder,
}

impl OrderEvent {
    /// Maps a uniform draw in `[0, 1)` to an outcome label.
    ///
    /// The thresholds are ordered and non-overlapping; the first match wins.
    /// Each band is closed on its lower bound and open on its upper bound, so
    /// e.g. an outcome of exactly `0.20` lands in `ProcessingDelay`.
    ///
    /// | outcome | event |
    /// |---|---|
    /// | `[0.00, 0.20)` | `PaymentFailed` |
    /// | `[0.20, 0.35)` | `ProcessingDelay` |
    /// | `[0.35, 0.45)` | `DuplicateOrder` |
    /// | `[0.45, 1.00)` | `OrderSuccess` |
    pub fn from_outcome(outcome: f64) -> Self {
        if outcome < 0.20 {
            OrderEvent::PaymentFailed
        } else if outcome < 0.35 {
            OrderEvent::ProcessingDelay
        } else if outcome < 0.45 {
            OrderEvent::DuplicateOrder
        } else {
            OrderEvent::OrderSuccess
        }
    }

    /// The wire label for this event, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderEvent::OrderSuccess => "ORDER_SUCCESS",
            OrderEvent::PaymentFailed => "PAYMENT_FAILED",
            OrderEvent::ProcessingDelay => "PROCESSING_DELAY",
            OrderEvent::DuplicateOrder => "DUPLICATE_ORDER",
        }
    }
}

impl Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One fabricated order outcome, serialized as a single JSON log line.
///
/// Field declaration order matches the wire order of the emitted line.
/// `deny_unknown_fields` keeps the round-trip strict: a parsed line with any
/// extra key is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderRecord {
    /// ISO-8601 UTC instant captured at emission time, millisecond precision.
    pub timestamp: String,
    /// `"ORD-"` followed by exactly six alphanumeric characters.
    pub order_id: String,
    /// `"CUST-"` followed by a single digit `0-9`.
    pub customer_id: String,
    pub event: OrderEvent,
    /// Integer in `[AMOUNT_MIN, AMOUNT_MAX]`.
    pub amount: u32,
    /// Wall-clock milliseconds from cycle start to emission; includes the
    /// processing delay when one was taken.
    pub processing_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_thresholds_are_closed_lower_open_upper() {
        assert_eq!(OrderEvent::from_outcome(0.0), OrderEvent::PaymentFailed);
        assert_eq!(OrderEvent::from_outcome(0.10), OrderEvent::PaymentFailed);
        assert_eq!(OrderEvent::from_outcome(0.19999), OrderEvent::PaymentFailed);
        assert_eq!(OrderEvent::from_outcome(0.20), OrderEvent::ProcessingDelay);
        assert_eq!(OrderEvent::from_outcome(0.30), OrderEvent::ProcessingDelay);
        assert_eq!(
            OrderEvent::from_outcome(0.34999),
            OrderEvent::ProcessingDelay
        );
        assert_eq!(OrderEvent::from_outcome(0.35), OrderEvent::DuplicateOrder);
        assert_eq!(OrderEvent::from_outcome(0.40), OrderEvent::DuplicateOrder);
        assert_eq!(
            OrderEvent::from_outcome(0.44999),
            OrderEvent::DuplicateOrder
        );
        assert_eq!(OrderEvent::from_outcome(0.45), OrderEvent::OrderSuccess);
        assert_eq!(OrderEvent::from_outcome(0.99), OrderEvent::OrderSuccess);
    }

    #[test]
    fn event_labels_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderEvent::OrderSuccess).unwrap(),
            "\"ORDER_SUCCESS\""
        );
        assert_eq!(
            serde_json::to_string(&OrderEvent::PaymentFailed).unwrap(),
            "\"PAYMENT_FAILED\""
        );
        assert_eq!(
            serde_json::to_string(&OrderEvent::ProcessingDelay).unwrap(),
            "\"PROCESSING_DELAY\""
        );
        assert_eq!(
            serde_json::to_string(&OrderEvent::DuplicateOrder).unwrap(),
            "\"DUPLICATE_ORDER\""
        );
        assert_eq!(OrderEvent::DuplicateOrder.as_str(), "DUPLICATE_ORDER");
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = OrderRecord {
            timestamp: "2024-01-01T12:00:00.000Z".to_string(),
            order_id: "ORD-a1b2c3".to_string(),
            customer_id: "CUST-7".to_string(),
            event: OrderEvent::OrderSuccess,
            amount: 1234,
            processing_time_ms: 3,
        };

        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(
            line,
            r#"{"timestamp":"2024-01-01T12:00:00.000Z","orderId":"ORD-a1b2c3","customerId":"CUST-7","event":"ORDER_SUCCESS","amount":1234,"processingTimeMs":3}"#
        );

        let parsed: OrderRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn record_rejects_unknown_fields() {
        let line = r#"{"timestamp":"t","orderId":"ORD-000000","customerId":"CUST-0","event":"ORDER_SUCCESS","amount":100,"processingTimeMs":0,"extra":true}"#;
        assert!(serde_json::from_str::<OrderRecord>(line).is_err());
    }
}
