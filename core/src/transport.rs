//! Request executor.
//!
//! # Design
//! One network call per invocation — no retries, no caching, no client-side
//! queue. Timeouts and connection pooling are delegated to reqwest. The
//! returned future is the cancellable pending result: dropping it aborts
//! the underlying call, and cancellation after the response has arrived is
//! a no-op.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::{ApiRequest, Body, Method};

/// Executes [`ApiRequest`] descriptors against the configured backend.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    config: ApiConfig,
}

impl Http {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes the request and deserializes the JSON response body.
    pub async fn request<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, ApiError> {
        let response = self.send(req).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Executes the request and discards the response body. Used for
    /// deletes and backend state-transition actions whose payload carries
    /// no information the caller needs.
    pub async fn execute(&self, req: ApiRequest) -> Result<(), ApiError> {
        self.send(req).await?;
        Ok(())
    }

    async fn send(&self, req: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let url = req.url(&self.config.base_url)?;
        let ApiRequest { method, body, .. } = req;

        debug!(%url, ?method, "api request");

        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url.clone());
        for (name, value) in &self.config.default_headers {
            builder = builder.header(name, value);
        }
        if let Some(source) = &self.config.token_source {
            if let Some(token) = source.access_token() {
                builder = builder.bearer_auth(token);
            }
        }
        match body {
            Some(Body::Json(value)) => builder = builder.json(&value),
            Some(Body::Multipart {
                field,
                file_name,
                content,
            }) => {
                let part = reqwest::multipart::Part::bytes(content).file_name(file_name);
                builder = builder.multipart(reqwest::multipart::Form::new().part(field, part));
            }
            None => {}
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%url, status = status.as_u16(), "backend error");
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}
