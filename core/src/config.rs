//! Client configuration.
//!
//! # Design
//! `ApiConfig` is an explicitly passed value, never process-global state.
//! Tests construct their own config pointing at a mock server; nothing in
//! this crate reads the environment. Token storage and refresh live outside
//! this layer — the config only holds a [`TokenSource`] that is asked for
//! the current token on every request.

use std::fmt;
use std::sync::Arc;

/// Supplies the current access token, if any.
///
/// Implemented for closures, so a test can pass `|| None` or
/// `|| Some("test-token".to_string())` directly.
pub trait TokenSource: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

impl<F> TokenSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn access_token(&self) -> Option<String> {
        (self)()
    }
}

/// A fixed token, for tests and long-lived service credentials.
#[derive(Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Shared request configuration: base URL, token source, default headers.
#[derive(Clone)]
pub struct ApiConfig {
    pub(crate) base_url: String,
    pub(crate) token_source: Option<Arc<dyn TokenSource>>,
    pub(crate) default_headers: Vec<(String, String)>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_source: None,
            default_headers: Vec::new(),
        }
    }

    pub fn with_token_source(mut self, source: impl TokenSource + 'static) -> Self {
        self.token_source = Some(Arc::new(source));
        self
    }

    pub fn with_static_token(self, token: impl Into<String>) -> Self {
        self.with_token_source(StaticToken(token.into()))
    }

    /// Adds a header sent with every request (e.g. a tenant id).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("has_token_source", &self.token_source.is_some())
            .field("default_headers", &self.default_headers)
            .finish()
    }
}
