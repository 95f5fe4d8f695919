//! HTTP transport
//!
//! [`Transport`] is the seam between the typed services and the wire. The
//! production implementation is [`HttpTransport`] (reqwest); tests plug in a
//! scripted transport instead.

use crate::{config::ClientConfig, error::ApiError};
use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt;

/// HTTP verb
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
            Method::Patch => Self::PATCH,
        }
    }
}

/// One request against the API root
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Endpoint path relative to the API root, e.g. `/tickets/1`
    pub path: String,
    /// JSON body for write verbs
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without a body
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a JSON body
    #[must_use]
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}

/// Performs requests and normalizes every failure into [`ApiError`]
///
/// An empty response body resolves to `Value::Null`.
pub trait Transport: Send + Sync {
    /// Send a request and return the decoded JSON payload
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ApiError>>;
}

/// reqwest-backed transport
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a transport for the given configuration
    ///
    /// # Errors
    ///
    /// Returns a network-kind [`ApiError`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Configuration this transport was built with
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[tracing::instrument(
        skip(self, request),
        name = "http_request",
        fields(method = %request.method, path = %request.path)
    )]
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        metrics::counter!("ticket_desk.http.requests").increment(1);

        let mut builder = self
            .client
            .request(request.method.into(), self.config.url_for(&request.path))
            .header("accept", "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                tracing::warn!("Request rejected as unauthorized");
            }
            let fallback = format!("Request failed with status code {}", status.as_u16());
            return Err(ApiError::from_status(status.as_u16(), &text, &fallback));
        }

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Response received");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::decode(e.to_string()))
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, ApiError>> {
        Box::pin(async move {
            let result = self.execute(request).await;
            if let Err(error) = &result {
                metrics::counter!("ticket_desk.http.errors").increment(1);
                tracing::debug!(%error, status = ?error.status(), "Request failed");
            }
            result
        })
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout(error.to_string())
    } else if error.is_decode() {
        ApiError::decode(error.to_string())
    } else {
        ApiError::network(error.to_string())
    }
}
