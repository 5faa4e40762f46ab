use chrono::Utc;

use super::models::{ProductsResponse, SaveProductRequest, WireProduct};
use super::*;

impl RigApiClient {
    /// List all Bits products for the extension, serialized into the
    /// string-typed form the rig UI edits. Provider order is preserved.
    pub async fn fetch_products(
        &self,
        host: &str,
        client_id: &str,
        token: &str,
    ) -> Result<Vec<ProductRecord>, RigError> {
        let url = format!(
            "{}/v5/bits/extensions/twitch.ext.{client_id}/products?includeAll=true",
            host_url(host)
        );
        let headers = Self::v5_headers(client_id, token);
        let (_, body) = self.get(&url, headers).await?;

        let resp: ProductsResponse = serde_json::from_str(&body)?;
        if resp.error.is_some() {
            return Err(RigError::Provider(resp.message.unwrap_or_default()));
        }
        let products = resp.products.ok_or_else(|| {
            RigError::Data(format!("Unable to get products for clientId: {client_id}"))
        })?;

        let now = Utc::now();
        let records: Vec<ProductRecord> = products
            .into_iter()
            .map(|p| ProductRecord::from_wire(p, now))
            .collect();
        tracing::debug!(count = records.len(), "Fetched bits products");
        Ok(records)
    }

    /// Submit one product. Never returns `Err`: any failure comes back
    /// inside the outcome so a concurrent batch keyed by `index` can
    /// collect every result.
    pub async fn save_product(
        &self,
        host: &str,
        client_id: &str,
        token: &str,
        product: &ProductRecord,
        index: usize,
    ) -> SaveOutcome {
        match self.put_product(host, client_id, token, product).await {
            Ok(()) => SaveOutcome::Saved { index },
            Err(error) => {
                tracing::warn!(index, %error, "Product save failed");
                SaveOutcome::Failed { index, error }
            }
        }
    }

    async fn put_product(
        &self,
        host: &str,
        client_id: &str,
        token: &str,
        product: &ProductRecord,
    ) -> Result<(), RigError> {
        let url = format!(
            "{}/v5/bits/extensions/twitch.ext.{client_id}/products/put",
            host_url(host)
        );
        let payload = SaveProductRequest {
            product: WireProduct::from_record(product, client_id, Utc::now()),
        };
        let headers = Self::v5_headers(client_id, token);
        let (status, body) = self.post(&url, headers, &payload).await?;

        if !status.is_success() {
            return Err(RigError::Provider(body));
        }
        serde_json::from_str::<serde_json::Value>(&body)?;
        Ok(())
    }
}
