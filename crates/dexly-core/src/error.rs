// ── Core error types ──
//
// User-facing errors from dexly-core. Consumers never see raw HTTP or
// JSON failures; the `From<dexly_api::Error>` impl translates them.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach data source at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Data source timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Pokémon not found: {identifier}")]
    PokemonNotFound { identifier: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dexly_api::Error> for CoreError {
    fn from(err: dexly_api::Error) -> Self {
        match err {
            dexly_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            dexly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            dexly_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            dexly_api::Error::Status { status, body } => CoreError::Api {
                message: if body.is_empty() {
                    format!("upstream returned HTTP {status}")
                } else {
                    format!("upstream returned HTTP {status}: {body}")
                },
                status: Some(status),
            },
            dexly_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

impl CoreError {
    /// Map a failed single-record lookup. Only here does a 404 mean the
    /// record is missing; on other endpoints it stays an API error.
    pub(crate) fn from_lookup(err: dexly_api::Error, identifier: impl ToString) -> Self {
        if err.is_not_found() {
            Self::PokemonNotFound {
                identifier: identifier.to_string(),
            }
        } else {
            Self::from(err)
        }
    }
}
