//! Web server module for handling inbound UQPay webhooks.
//!
//! This module provides a thin web server that:
//! - Receives signed webhooks from UQPay
//! - Verifies the HMAC-SHA512 signature over the raw body
//! - Decodes and records the event
//!
//! # Endpoints
//!
//! - `POST /go/webhook` - UQPay event notifications
//! - `GET /health` - Returns 200 if the server is running

use axum::{
    routing::{get, post},
    Router,
};

pub mod handlers;
pub mod signature;

pub use handlers::{
    health, uqpay_webhook, AppState, ErrorResponse, HealthResponse, WebhookError,
    HEADER_SIGNATURE, HEADER_TIMESTAMP,
};
pub use signature::verify_uqpay_signature;

/// Route UQPay delivers webhooks to.
pub const WEBHOOK_PATH: &str = "/go/webhook";

/// Builds the axum Router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(WEBHOOK_PATH, post(uqpay_webhook))
        .with_state(state)
}
