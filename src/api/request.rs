use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde::Serialize;

use super::*;

impl RigApiClient {
    /// Headers shared by every Twitch-directed request.
    fn rig_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static(RIG_REFERRER));
        headers.insert(USER_AGENT, HeaderValue::from_static(RIG_REFERRER));
        headers
    }

    /// Client-ID only, for unauthenticated Helix lookups.
    pub(super) fn client_id_headers(client_id: &str) -> HeaderMap {
        let mut headers = Self::rig_headers();
        headers.insert("Client-ID", HeaderValue::from_str(client_id).unwrap());
        headers
    }

    /// Bearer token, for Helix requests on behalf of a logged-in user.
    pub(super) fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = Self::rig_headers();
        let bearer = format!("Bearer {token}");
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer).unwrap());
        headers
    }

    /// Bearer jwt + Client-ID + versioned accept, for the Kraken
    /// extension search endpoint.
    pub(super) fn kraken_headers(client_id: &str, jwt: &str) -> HeaderMap {
        let mut headers = Self::bearer_headers(jwt);
        headers.insert("Client-ID", HeaderValue::from_str(client_id).unwrap());
        headers.insert(ACCEPT, HeaderValue::from_static(TWITCH_V5_ACCEPT));
        headers
    }

    /// OAuth token + Client-ID + versioned accept, for the v5 Bits
    /// product endpoints.
    pub(super) fn v5_headers(client_id: &str, token: &str) -> HeaderMap {
        let mut headers = Self::client_id_headers(client_id);
        let oauth = format!("OAuth {token}");
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&oauth).unwrap());
        headers.insert(ACCEPT, HeaderValue::from_static(TWITCH_V5_ACCEPT));
        headers
    }

    /// GitHub releases API headers; no auth, no rig referrer.
    pub(super) fn github_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(RIG_REFERRER));
        headers
    }

    /// Execute a GET request. Status classification is left to the
    /// caller; each endpoint reads failure bodies differently.
    pub(super) async fn get(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<(StatusCode, String), RigError> {
        let resp = self.http.get(url).headers(headers).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(url, %status, "Non-success response");
        }

        Ok((status, body))
    }

    /// Execute a POST request with a JSON body.
    pub(super) async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &impl Serialize,
    ) -> Result<(StatusCode, String), RigError> {
        let resp = self.http.post(url).headers(headers).json(body).send().await?;

        let status = resp.status();
        let resp_body = resp.text().await?;

        if !status.is_success() {
            tracing::warn!(url, %status, "Non-success response");
        }

        Ok((status, resp_body))
    }
}
