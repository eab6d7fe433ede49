//! UQPay webhook receiver.
//!
//! Authenticates UQPay event notifications with a shared-secret HMAC-SHA512
//! signature, then decodes and records the event.
//!
//! ## Architecture
//!
//! ```text
//! UQPay → POST /webhooks/uqpay → verify signature → decode InboundEvent → record
//! ```

pub mod config;
pub mod event;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use event::{record_event, InboundEvent};
pub use web::{build_router, verify_uqpay_signature, AppState};
