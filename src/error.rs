//! Crate-wide error type and `Result` alias.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ForgeError>;

/// All failure modes of the builder core.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// No cached response exists for a request URL. Internal to the fetch
    /// path — always recovered by falling through to the network.
    #[error("no cached response for this URL")]
    CacheMiss,

    /// A network fetch or response decode failed. Carries the failing URL so
    /// callers can decide their fallback policy. Never retried automatically.
    #[error("request to {url} failed")]
    ApiRequest { url: String },

    /// Existence of a species could not be established remotely.
    #[error("Pokemon {0} does not exist")]
    SpeciesNotFound(String),

    /// A single `create()` call failed. Terminal for that call only; the
    /// message is shown verbatim to the user.
    #[error("{0}")]
    Creation(String),

    /// A level outside the valid `[1, 100]` range was supplied.
    #[error("level {0} is outside the valid range 1-100")]
    InvalidLevel(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
