//! Webhook endpoint handlers.
//!
//! The UQPay handler runs a fixed, linear pipeline per request:
//! 1. Read the raw body
//! 2. Extract the signature and timestamp headers
//! 3. Resolve the configured secret
//! 4. Verify the signature
//! 5. Decode the JSON event
//! 6. Record the event
//!
//! Any step may end the request early with an error response. The body is
//! never parsed before its signature has been verified.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::event::{record_event, InboundEvent};
use crate::web::signature::verify_uqpay_signature;
use crate::Config;

/// Header carrying the hex HMAC-SHA512 signature.
pub const HEADER_SIGNATURE: &str = "x-wk-signature";
/// Header carrying the timestamp that was signed along with the body.
pub const HEADER_TIMESTAMP: &str = "x-wk-timestamp";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// UQPay Webhook
// =============================================================================

/// Reasons a webhook request ends before it is acknowledged.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request body could not be read in full.
    #[error("Failed to read request body")]
    BodyRead,

    /// Signature or timestamp header absent or empty.
    #[error("Missing signature or timestamp headers")]
    MissingHeaders,

    /// No webhook secret configured on this deployment.
    #[error("Internal server error")]
    SecretNotConfigured,

    /// Signature did not verify. Covers bad hex and digest mismatch alike.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Body was authentic but not a usable event.
    #[error("Invalid JSON payload")]
    InvalidJson(#[source] serde_json::Error),
}

impl WebhookError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebhookError::BodyRead | WebhookError::SecretNotConfigured => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            WebhookError::MissingHeaders | WebhookError::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            WebhookError::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        // Display strings are the caller-facing messages; details stay in logs.
        (
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// UQPay webhook endpoint.
///
/// # Response
///
/// - 200 `OK`: Event verified, decoded and recorded
/// - 400: Missing headers or invalid JSON
/// - 401: Invalid signature
/// - 500: Body unreadable or secret not configured
pub async fn uqpay_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<(StatusCode, &'static str), WebhookError> {
    let body = match axum::body::to_bytes(body, state.config.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "uqpay_body_read_failed");
            return Err(WebhookError::BodyRead);
        }
    };

    let (signature, timestamp) = match (
        header_value(&headers, HEADER_SIGNATURE),
        header_value(&headers, HEADER_TIMESTAMP),
    ) {
        (Some(signature), Some(timestamp)) => (signature, timestamp),
        (signature, timestamp) => {
            warn!(
                has_signature = signature.is_some(),
                has_timestamp = timestamp.is_some(),
                "uqpay_headers_missing"
            );
            return Err(WebhookError::MissingHeaders);
        }
    };

    info!(
        body_length = body.len(),
        timestamp = %String::from_utf8_lossy(timestamp),
        "uqpay_webhook_received"
    );

    let Some(secret) = state.config.webhook_secret() else {
        error!(env_var = "UQPAY_WEBHOOK_SECRET", "uqpay_webhook_secret_not_configured");
        return Err(WebhookError::SecretNotConfigured);
    };

    // Must pass before the body is parsed in any way.
    if !verify_uqpay_signature(&body, signature, timestamp, secret) {
        warn!(
            signature = %String::from_utf8_lossy(signature),
            timestamp = %String::from_utf8_lossy(timestamp),
            "uqpay_signature_invalid"
        );
        return Err(WebhookError::InvalidSignature);
    }

    let event = match InboundEvent::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "uqpay_payload_invalid_json");
            return Err(WebhookError::InvalidJson(e));
        }
    };

    record_event(&event);

    Ok((StatusCode::OK, "OK"))
}

/// The raw bytes of a header, if present and non-empty.
///
/// Values are not required to be visible ASCII: the timestamp is signed
/// byte-for-byte and a non-hex signature is left for verification to reject.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a [u8]> {
    headers
        .get(name)
        .map(|v| v.as_bytes())
        .filter(|v| !v.is_empty())
}
