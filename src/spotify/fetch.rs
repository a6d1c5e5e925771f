use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;

use crate::{error::SpotifyError, warning};

use super::SpotifyClient;

impl SpotifyClient {
    /// Sends a request to `endpoint` with a freshly acquired bearer token.
    ///
    /// The raw response is returned untouched so each caller can interpret the
    /// status code itself. If the token exchange fails the request is never
    /// sent and the failure comes back as [`SpotifyError::Auth`].
    pub async fn fetch(&self, method: Method, endpoint: &str) -> Result<Response, SpotifyError> {
        let req = self.authorized(method, endpoint).await?;
        Ok(req.send().await?)
    }

    /// Like [`SpotifyClient::fetch`], with `body` serialized as JSON.
    ///
    /// Sets `Content-Type: application/json`.
    pub async fn fetch_json<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<Response, SpotifyError>
    where
        B: Serialize + ?Sized,
    {
        let req = self.authorized(method, endpoint).await?;
        Ok(req.json(body).send().await?)
    }

    async fn authorized(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder, SpotifyError> {
        let token = self
            .get_access_token()
            .await
            .inspect_err(|e| warning!("{}", e))?;

        Ok(self
            .http
            .request(method, endpoint)
            .bearer_auth(token.access_token))
    }
}
