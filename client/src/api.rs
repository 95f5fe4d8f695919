//! Typed verb helpers over a [`Transport`]

use crate::{
    error::ApiError,
    transport::{ApiRequest, Method, Transport},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;

/// Verb-level API client
///
/// Each helper takes an endpoint path relative to the API root and decodes
/// the payload into the caller's expected shape. There is no schema check
/// beyond decoding: the server contract is trusted. Use `()` for endpoints
/// that return an empty body.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Wraps a transport
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Serializes a request body
    ///
    /// # Errors
    ///
    /// Returns an encode-kind [`ApiError`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::encode(e.to_string()))
    }

    /// `GET endpoint`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any transport or decode failure.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Get, endpoint)).await
    }

    /// `POST endpoint`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any transport or decode failure.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Post, endpoint).with_body(body))
            .await
    }

    /// `PUT endpoint`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any transport or decode failure.
    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Put, endpoint).with_body(body))
            .await
    }

    /// `DELETE endpoint`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any transport or decode failure.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Delete, endpoint)).await
    }

    /// `PATCH endpoint`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any transport or decode failure.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        self.request(ApiRequest::new(Method::Patch, endpoint).with_body(body))
            .await
    }

    async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let payload = self.transport.send(request).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
