//! REST API client for the Twitch Developer Rig.
//!
//! One module per endpoint family, with shared header assembly and
//! request helpers in `request` and typed response shapes in `models`.

mod extensions;
mod products;
mod releases;
mod request;
mod users;

pub mod models;


pub use models::{
    DeserializedProduct, ProductCost, ProductRecord, ReleaseInfo, SaveOutcome, UserRecord,
    WireProduct,
};

use crate::RigError;

const HELIX_BASE: &str = "https://api.twitch.tv";
const GITHUB_BASE: &str = "https://api.github.com";

/// Referrer sent with every Twitch-directed request.
const RIG_REFERRER: &str = "Twitch Developer Rig";

const TWITCH_V5_ACCEPT: &str = "application/vnd.twitchtv.v5+json";
const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Stateless client for the rig's provider endpoints.
///
/// Endpoints that take a `host` argument are addressed per call; the
/// fixed-host endpoints (Helix user info, GitHub releases) use the
/// base URLs configured on the client.
pub struct RigApiClient {
    pub(super) http: reqwest::Client,
    helix_base: String,
    github_base: String,
}

impl RigApiClient {
    pub fn new() -> Self {
        Self::with_base_urls(HELIX_BASE, GITHUB_BASE)
    }

    /// Point the fixed-host endpoints elsewhere. Tests use this to
    /// target a local mock server instead of swapping out the transport.
    pub fn with_base_urls(helix_base: &str, github_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            helix_base: helix_base.trim_end_matches('/').to_string(),
            github_base: github_base.trim_end_matches('/').to_string(),
        }
    }

}

impl Default for RigApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix `https://` unless the host already carries a scheme.
fn host_url(host: &str) -> String {
    if host.contains("://") {
        host.trim_end_matches('/').to_string()
    } else {
        format!("https://{host}")
    }
}
