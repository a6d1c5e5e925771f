use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;

use crate::{
    error::AuthError,
    types::{AccessToken, TokenErrorResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Exchanges the configured refresh token for a short-lived access token.
    ///
    /// Posts the `refresh_token` grant to the token endpoint. The client
    /// credentials go in an HTTP Basic `Authorization` header and the grant is
    /// sent as a form-encoded body. A new token is requested on every call;
    /// nothing is cached.
    ///
    /// # Returns
    ///
    /// - `Ok(AccessToken)` - the token response; only `access_token` is used further
    /// - `Err(AuthError::Rejected)` - non-success status, carrying the upstream
    ///   `error` / `error_description` text
    /// - `Err(AuthError::Transport)` - network failure
    /// - `Err(AuthError::Decode)` - success status with an undecodable body
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let token = client.get_access_token().await?;
    /// println!("Bearer {}", token.access_token);
    /// ```
    pub async fn get_access_token(&self) -> Result<AccessToken, AuthError> {
        let config = self.config();
        let basic = basic_credentials(&config.client_id, &config.client_secret);

        let res = self
            .http
            .post(&config.token_url)
            .header(AUTHORIZATION, format!("Basic {}", basic))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", config.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let reason = match res.json::<TokenErrorResponse>().await {
                Ok(body) => body.reason(),
                Err(_) => status.to_string(),
            };
            return Err(AuthError::Rejected(reason));
        }

        res.json::<AccessToken>().await.map_err(AuthError::Decode)
    }
}

/// Base64 encoding of `client_id:client_secret` for HTTP Basic auth.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}
