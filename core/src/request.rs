//! Request descriptors.
//!
//! # Design
//! `ApiRequest` describes one backend call as plain data: method, URL path
//! template, path-parameter substitutions, query pairs, optional body.
//! Service modules build descriptors; the transport executes them. URL
//! construction is pure, so every service's request shape is unit-testable
//! without a network.

use serde::Serialize;
use url::Url;

use crate::error::ApiError;

/// HTTP method for a request. The backend contract uses PATCH (not PUT)
/// for partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// Request body. JSON everywhere except file uploads, which send a single
/// multipart file field.
#[derive(Debug, Clone)]
pub enum Body {
    Json(serde_json::Value),
    Multipart {
        field: String,
        file_name: String,
        content: Vec<u8>,
    },
}

/// An HTTP request described as plain data.
///
/// `path` is a template: `{name}` placeholders are substituted from
/// `path_params` when the final URL is built.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub path_params: Vec<(&'static str, String)>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Body>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Binds a `{name}` placeholder in the path template.
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Adds a query parameter only when the value is present. Absent values
    /// are omitted from the query string entirely, never sent empty.
    pub fn query_opt(self, name: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    pub fn multipart(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        self.body = Some(Body::Multipart {
            field: field.into(),
            file_name: file_name.into(),
            content,
        });
        self
    }

    /// Builds the final URL: substitutes each path parameter into its
    /// `{name}` placeholder exactly once, joins with the base URL, and
    /// appends the accumulated query pairs.
    pub fn url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut path = self.path.clone();
        for (name, value) in &self.path_params {
            let placeholder = format!("{{{name}}}");
            path = path.replacen(&placeholder, value, 1);
        }

        let full = format!("{}{}", base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&full)
            .map_err(|e| ApiError::Transport(format!("invalid url {full}: {e}")))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const BASE: &str = "http://localhost:3000";

    #[test]
    fn path_param_substitutes_exactly_once() {
        let id = Uuid::nil();
        let req = ApiRequest::get("/api/contract/{id}").path_param("id", id);
        let url = req.url(BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/contract/00000000-0000-0000-0000-000000000000"
        );
        assert!(url.query().is_none());
    }

    #[test]
    fn absent_query_values_are_omitted() {
        let req = ApiRequest::get("/api/contract/findMany")
            .query_opt("skip", Some(0u64))
            .query_opt("take", Some(10u64))
            .query_opt("search", None::<String>)
            .query_opt("isActive", None::<bool>);
        let url = req.url(BASE).unwrap();
        assert_eq!(url.query(), Some("skip=0&take=10"));
    }

    #[test]
    fn no_query_pairs_means_no_question_mark() {
        let req = ApiRequest::get("/api/mine/findMany");
        let url = req.url(BASE).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/mine/findMany");
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let req = ApiRequest::get("/api/mine/findMany");
        let url = req.url("http://localhost:3000/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/mine/findMany");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let req = ApiRequest::get("/api/contract/findMany").query("search", "Gulf & Co");
        let url = req.url(BASE).unwrap();
        assert_eq!(url.query(), Some("search=Gulf+%26+Co"));
    }

    #[test]
    fn json_body_is_attached() {
        #[derive(Serialize)]
        struct Payload {
            name: String,
        }
        let req = ApiRequest::post("/api/entity/create")
            .json(&Payload {
                name: "Acme".to_string(),
            })
            .unwrap();
        match req.body {
            Some(Body::Json(value)) => assert_eq!(value["name"], "Acme"),
            other => panic!("expected json body, got {other:?}"),
        }
    }

    #[test]
    fn multipart_body_keeps_field_and_file_name() {
        let req =
            ApiRequest::post("/express/image/upload").multipart("file", "logo.png", vec![1, 2, 3]);
        match req.body {
            Some(Body::Multipart {
                field,
                file_name,
                content,
            }) => {
                assert_eq!(field, "file");
                assert_eq!(file_name, "logo.png");
                assert_eq!(content, vec![1, 2, 3]);
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[test]
    fn id_is_not_duplicated_into_query() {
        let id = Uuid::new_v4();
        let req = ApiRequest::delete("/api/expense/{id}").path_param("id", id);
        let url = req.url(BASE).unwrap();
        assert!(url.path().ends_with(&id.to_string()));
        assert!(url.query().is_none());
    }
}
