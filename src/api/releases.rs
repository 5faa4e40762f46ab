use super::models::ReleaseResponse;
use super::*;

impl RigApiClient {
    /// Fetch the latest developer rig release from GitHub.
    pub async fn fetch_new_release(&self) -> Result<ReleaseInfo, RigError> {
        let url = format!(
            "{}/repos/twitchdev/developer-rig/releases/latest",
            self.github_base
        );
        let headers = Self::github_headers();
        let (_, body) = self.get(&url, headers).await?;

        let resp: ReleaseResponse = serde_json::from_str(&body)?;
        // assets may legitimately be empty; treat that like an absent url
        let zip_url = resp
            .assets
            .into_iter()
            .next()
            .and_then(|a| a.browser_download_url);

        match (resp.tag_name, zip_url) {
            (Some(tag_name), Some(zip_url)) => Ok(ReleaseInfo { tag_name, zip_url }),
            _ => Err(RigError::ReleaseNotFound),
        }
    }
}
