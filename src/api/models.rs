use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::RigError;

/// Opaque Helix user object; the rig passes it through untouched.
pub type UserRecord = serde_json::Value;

/// Wrapper for Helix `data` array responses.
#[derive(Debug, Deserialize)]
pub(super) struct UserDataResponse {
    #[serde(default)]
    pub(super) data: Vec<UserRecord>,
}

/// Request body for POST /kraken/extensions/search.
#[derive(Debug, Serialize)]
pub(super) struct ExtensionSearchRequest {
    pub(super) limit: u32,
    pub(super) searches: Vec<SearchFilter>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchFilter {
    pub(super) field: &'static str,
    pub(super) term: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ExtensionSearchResponse {
    #[serde(default)]
    pub(super) extensions: Vec<serde_json::Value>,
}

/// Response from the v5 Bits products endpoint. The provider signals
/// failure with an `error` field in an otherwise well-formed body.
#[derive(Debug, Deserialize)]
pub(super) struct ProductsResponse {
    #[serde(default)]
    pub(super) error: Option<serde_json::Value>,
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) products: Option<Vec<DeserializedProduct>>,
}

/// Nested cost object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCost {
    pub amount: u64,
}

/// Product as returned by the v5 Bits products endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeserializedProduct {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub cost: Option<ProductCost>,
    #[serde(default)]
    pub in_development: bool,
    #[serde(default)]
    pub broadcast: bool,
    #[serde(default)]
    pub expiration: Option<String>,
}

/// Product in the string-typed form the rig UI edits.
///
/// `amount`, `in_development` and `broadcast` are strings on purpose:
/// the consuming UI treats every editable field as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub sku: String,
    pub display_name: String,
    pub amount: String,
    pub in_development: String,
    pub broadcast: String,
    pub deprecated: bool,
}

impl ProductRecord {
    /// Forward transform from the wire form, evaluated at `now`.
    pub(super) fn from_wire(p: DeserializedProduct, now: DateTime<Utc>) -> Self {
        let deprecated = p
            .expiration
            .as_deref()
            .and_then(|exp| DateTime::parse_from_rfc3339(exp).ok())
            .map(|exp| exp.with_timezone(&Utc) <= now)
            .unwrap_or(false);

        Self {
            sku: p.sku.unwrap_or_default(),
            display_name: p.display_name.unwrap_or_default(),
            amount: p
                .cost
                .map(|c| c.amount.to_string())
                .unwrap_or_else(|| "1".to_string()),
            in_development: bool_str(p.in_development),
            broadcast: bool_str(p.broadcast),
            deprecated,
        }
    }
}

fn bool_str(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

#[derive(Debug, Serialize)]
pub(super) struct SaveProductRequest {
    pub(super) product: WireProduct,
}

#[derive(Debug, Serialize)]
pub struct WireCost {
    // amount stays in the string form the UI produced; the provider
    // accepts numeric-as-string here
    pub amount: String,
    #[serde(rename = "type")]
    pub cost_type: &'static str,
}

/// Product payload for POST .../products/put.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    pub domain: String,
    pub sku: String,
    pub display_name: String,
    pub cost: WireCost,
    pub in_development: bool,
    pub broadcast: bool,
    pub expiration: Option<String>,
}

impl WireProduct {
    /// Reverse transform for submission. `expiration` is re-derived
    /// from the `deprecated` flag rather than preserved: a deprecated
    /// product expires at the moment it is saved.
    pub(super) fn from_record(product: &ProductRecord, client_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            domain: format!("twitch.ext.{client_id}"),
            sku: product.sku.clone(),
            display_name: product.display_name.clone(),
            cost: WireCost {
                amount: product.amount.clone(),
                cost_type: "bits",
            },
            in_development: product.in_development == "true",
            broadcast: product.broadcast == "true",
            expiration: product
                .deprecated
                .then(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

/// Outcome of a single [`super::RigApiClient::save_product`] call.
///
/// Saves are issued in batches keyed by a caller-assigned index; a
/// failed item carries its error here instead of failing the batch.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { index: usize },
    Failed { index: usize, error: RigError },
}

impl SaveOutcome {
    pub fn index(&self) -> usize {
        match self {
            Self::Saved { index } | Self::Failed { index, .. } => *index,
        }
    }
}

/// Latest developer rig release, from the GitHub releases API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub zip_url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReleaseResponse {
    #[serde(default)]
    pub(super) tag_name: Option<String>,
    #[serde(default)]
    pub(super) assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReleaseAsset {
    #[serde(default)]
    pub(super) browser_download_url: Option<String>,
}
