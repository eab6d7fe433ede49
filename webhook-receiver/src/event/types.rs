//! UQPay webhook payload types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A decoded UQPay webhook event.
///
/// Every field is optional on the wire: missing and `null` fields decode to
/// their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Payload schema version
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
    /// Coarse category, e.g. "payment"
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
    /// Specific action, e.g. "completed"
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_name: String,
    /// Provider-assigned identifier. Not deduplicated.
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_id: String,
    /// Event-specific body with arbitrary JSON values
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Map<String, Value>,
}

impl InboundEvent {
    /// Decode an event from a verified request body.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
