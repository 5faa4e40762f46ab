//! Twitch Developer Rig API client library.
//!
//! Provides typed access to the REST endpoints the rig talks to:
//! Helix user lookup, Kraken extension manifest search, v5 Bits
//! products, and the GitHub latest-release endpoint.

pub mod api;
pub mod case;

pub use api::{
    ProductRecord, ReleaseInfo, RigApiClient, SaveOutcome, UserRecord,
};

/// Unified error type for the rig-api crate.
#[derive(Debug, thiserror::Error)]
pub enum RigError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to authorize for user {username} and client id {client_id}")]
    Authorization { username: String, client_id: String },

    #[error("Unable to hit Twitch API to initialize the rig. Try again later.")]
    ServiceUnavailable,

    #[error("{0}")]
    Data(String),

    #[error("{0}")]
    Provider(String),

    #[error("Unable to retrieve extension manifest, please verify EXT_OWNER_NAME and EXT_SECRET")]
    ManifestNotFound,

    #[error("Cannot get GitHub developer rig latest release")]
    ReleaseNotFound,
}
