//! HTTP client for communicating with the CyberArk REST API.

use cyberark_core::Config;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

const JSON_CONTENT_TYPE: &str = "application/json";

const USER_AGENT: &str = concat!("cyberark/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over `reqwest` for the CyberArk REST API.
///
/// Every request carries the raw API secret in the `Authorization` header
/// (no scheme prefix) and `Content-Type: application/json`. Any status
/// outside `200..300` becomes [`ApiError::Status`] with the response body
/// as diagnostic text.
///
/// The client does not retry. Workflows that want retries implement them
/// around these calls.
///
/// # Examples
///
/// ```no_run
/// use cyberark_core::Config;
/// use cyberarkctl::client::ApiClient;
///
/// # async fn example(config: &Config) -> anyhow::Result<()> {
/// let client = ApiClient::new(config)?;
/// let body = client.get("Accounts").await?;
/// println!("{}", String::from_utf8_lossy(&body));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<'a> {
    config: &'a Config,
    client: Client,
}

impl<'a> ApiClient<'a> {
    /// Create a client using the timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Build`] if the HTTP client cannot be created.
    pub fn new(config: &'a Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self { config, client })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Join the base URL and `endpoint` with a single slash.
    ///
    /// No normalization or percent-encoding is applied; callers pass a
    /// well-formed endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url, endpoint)
    }

    /// Send a GET request and return the raw response body.
    pub async fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(endpoint);
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        Self::handle_response(response, &url).await
    }

    /// Send a GET request and decode the JSON response body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let body = self.get(endpoint).await?;
        serde_json::from_slice(&body).map_err(ApiError::Deserialize)
    }

    /// Send a POST request with `payload` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialize`] before touching the network if the
    /// payload cannot be encoded.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Vec<u8>, ApiError> {
        self.send_json(Method::POST, endpoint, payload).await
    }

    /// Send a PUT request with `payload` encoded as JSON.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<Vec<u8>, ApiError> {
        self.send_json(Method::PUT, endpoint, payload).await
    }

    /// Send a DELETE request.
    ///
    /// On a non-2xx status the body is read best-effort for the error
    /// message; a failed read leaves the message empty instead of replacing
    /// the status error.
    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let url = self.url(endpoint);
        let response = self.send(self.request(Method::DELETE, &url), &url).await?;

        let status = response.status();
        let body = response.bytes().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(())
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &T,
    ) -> Result<Vec<u8>, ApiError> {
        let body = serde_json::to_vec(payload).map_err(ApiError::Serialize)?;
        let url = self.url(endpoint);
        let response = self
            .send(self.request(method, &url).body(body), &url)
            .await?;
        Self::handle_response(response, &url).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.config.api_secret.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let request = builder.build().map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;

        debug!(method = %request.method(), url, "sending request");

        let response =
            self.client
                .execute(request)
                .await
                .map_err(|source| ApiError::Transport {
                    url: url.to_string(),
                    source,
                })?;

        debug!(status = response.status().as_u16(), url, "received response");
        Ok(response)
    }

    /// Read the whole body, then check the status.
    async fn handle_response(response: Response, url: &str) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::ReadBody {
                url: url.to_string(),
                source,
            })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }
}
