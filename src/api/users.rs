use super::models::UserDataResponse;
use super::*;

impl RigApiClient {
    /// Look up a user record by login name.
    pub async fn fetch_user_by_name(
        &self,
        host: &str,
        client_id: &str,
        username: &str,
    ) -> Result<UserRecord, RigError> {
        let url = format!("{}/helix/users?login={username}", host_url(host));
        let headers = Self::client_id_headers(client_id);
        let (status, body) = self.get(&url, headers).await?;

        if status.is_client_error() {
            return Err(RigError::Authorization {
                username: username.to_string(),
                client_id: client_id.to_string(),
            });
        }
        if status.is_server_error() {
            return Err(RigError::ServiceUnavailable);
        }

        let resp: UserDataResponse = serde_json::from_str(&body)?;
        resp.data.into_iter().next().ok_or_else(|| {
            RigError::Data(format!("Unable to verify the id for username: {username}"))
        })
    }

    /// Fetch the user record behind an access token from the fixed
    /// Helix host.
    pub async fn fetch_user_info(&self, access_token: &str) -> Result<UserRecord, RigError> {
        let url = format!("{}/helix/users", self.helix_base);
        let headers = Self::bearer_headers(access_token);
        let (_, body) = self.get(&url, headers).await?;

        let resp: UserDataResponse = serde_json::from_str(&body)?;
        resp.data.into_iter().next().ok_or_else(|| {
            RigError::Data(format!("Unable to get user data for token: {access_token}"))
        })
    }
}
