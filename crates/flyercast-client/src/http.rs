//! HTTP plumbing shared by every endpoint binding.

use bytes::Bytes;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use flyercast_core::AppResult;
use flyercast_core::config::api::ApiConfig;

use crate::error::ClientError;

/// Typed client for the Flyercast backend.
///
/// Cheap to clone; the underlying connection pool is shared. The bearer
/// token is attached to every request once a session is installed.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against the configured backend.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            flyercast_core::AppError::configuration(format!(
                "Invalid base URL '{}': {e}",
                config.base_url
            ))
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        })
    }

    /// Install the session bearer token used for subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Return a copy of this client carrying the given bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The installed bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolve a request path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidRequest(format!("Bad endpoint '{path}': {e}")))
    }

    /// Start a request with the bearer token attached.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Check the response status, reading the body as the error message on
    /// failure.
    pub(crate) async fn check(&self, response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            message: if message.is_empty() {
                status.to_string()
            } else {
                message
            },
        })
    }

    /// `GET` a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self.request(Method::GET, url).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// `POST` a JSON body and decode a JSON response.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");
        let response = self.request(Method::POST, url).json(body).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// `PUT` a JSON body and decode a JSON response.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PUT");
        let response = self.request(Method::PUT, url).json(body).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// `DELETE` a resource, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");
        let response = self.request(Method::DELETE, url).send().await?;
        self.check(response).await?;
        Ok(())
    }

    /// `GET` a binary resource through the authenticated session.
    ///
    /// A 2xx response with an empty body is reported as
    /// [`ClientError::EmptyPayload`], never as success.
    pub async fn get_bytes(&self, path: &str) -> Result<Bytes, ClientError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET (binary)");
        let response = self.request(Method::GET, url).send().await?;
        let response = self.check(response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::EmptyPayload);
        }
        Ok(bytes)
    }
}
