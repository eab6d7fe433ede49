//! Configuration module for environment variable parsing.
//!
//! Configuration is read once at startup and handed to the web layer as an
//! explicit value. Handlers never consult the process environment.

use std::env;
use tracing::warn;

/// Default listen port when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Default upper bound on an inbound request body (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret for UQPay HMAC-SHA512 signature verification
    pub webhook_secret: Option<String>,

    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_number("PORT", DEFAULT_PORT),

            webhook_secret: non_empty(env::var("UQPAY_WEBHOOK_SECRET").ok()),

            max_body_bytes: parse_number("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        }
    }

    /// Build a configuration around a known secret, with default limits.
    pub fn new(webhook_secret: impl Into<String>) -> Self {
        Config {
            port: DEFAULT_PORT,
            webhook_secret: non_empty(Some(webhook_secret.into())),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// The configured webhook secret, if one is set.
    pub fn webhook_secret(&self) -> Option<&str> {
        self.webhook_secret.as_deref()
    }
}

// The secret must never end up in a log line through `?config`.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "<redacted>"))
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

/// Parse a numeric environment variable, falling back to `default`.
fn parse_number<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(env_var = name, value = %raw, "Invalid number, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Treat empty values as unset; whitespace-only values are kept.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
