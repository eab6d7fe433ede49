//! UQPay event model and handling.
//!
//! ## Processing Flow
//!
//! ```text
//! verified body → InboundEvent::from_slice() → record_event()
//! ```
//!
//! Only bodies whose signature has already been verified reach this module.

pub mod record;
pub mod types;

pub use record::record_event;
pub use types::InboundEvent;
