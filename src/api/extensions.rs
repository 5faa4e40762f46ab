use super::models::{ExtensionSearchRequest, ExtensionSearchResponse, SearchFilter};
use super::*;
use crate::case;

impl RigApiClient {
    /// Search Kraken for the manifest matching this client id and
    /// version. Keys of the returned manifest are deep-converted to
    /// camelCase.
    pub async fn fetch_extension_manifest(
        &self,
        host: &str,
        client_id: &str,
        version: &str,
        jwt: &str,
    ) -> Result<serde_json::Value, RigError> {
        let url = format!("{}/kraken/extensions/search", host_url(host));
        let request = ExtensionSearchRequest {
            limit: 1,
            searches: vec![
                SearchFilter {
                    field: "id",
                    term: client_id.to_string(),
                },
                SearchFilter {
                    field: "version",
                    term: version.to_string(),
                },
            ],
        };

        let headers = Self::kraken_headers(client_id, jwt);
        let (_, body) = self.post(&url, headers, &request).await?;

        let resp: ExtensionSearchResponse = serde_json::from_str(&body)?;
        resp.extensions
            .into_iter()
            .next()
            .map(case::to_camel_case)
            .ok_or(RigError::ManifestNotFound)
    }
}
