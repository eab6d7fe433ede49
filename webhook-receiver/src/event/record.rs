//! Record step for verified events.
//!
//! Received events are only logged for now; downstream business handling
//! plugs in here.

use tracing::info;

use super::InboundEvent;

/// Record a verified, decoded UQPay event.
pub fn record_event(event: &InboundEvent) {
    info!(
        version = %event.version,
        event_type = %event.event_type,
        event_name = %event.event_name,
        event_id = %event.event_id,
        "uqpay_event_received"
    );

    info!(
        event_id = %event.event_id,
        data = %serde_json::to_string(&event.data).unwrap_or_default(),
        "uqpay_event_data"
    );
}
