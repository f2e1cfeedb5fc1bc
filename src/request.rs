//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

use crate::method::Method;

/// An incoming HTTP request with its body fully buffered.
///
/// The query string is decoded once (`application/x-www-form-urlencoded`
/// rules: `+` and `%XX`) when the request is built, so handlers look values up
/// by key rather than parsing anything themselves.
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request for `target`, which is a path optionally followed by
    /// `?` and a query string.
    ///
    /// ```rust
    /// use postbox::{Method, Request};
    ///
    /// let req = Request::new(Method::Get, "/api/posts?sort=title&direction=desc");
    /// assert_eq!(req.path(), "/api/posts");
    /// assert_eq!(req.query("direction"), Some("desc"));
    /// ```
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self {
            method,
            path: path.to_owned(),
            query: url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
            headers: Vec::new(),
            body: Bytes::new(),
            params: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Buffers a hyper request into a [`Request`].
    ///
    /// Headers whose values are not visible ASCII are dropped; nothing in this
    /// crate reads them.
    pub(crate) async fn from_hyper(
        method: Method,
        req: hyper::Request<hyper::body::Incoming>,
    ) -> Result<Self, hyper::Error> {
        let (parts, body) = req.into_parts();
        let body = body.collect().await?.to_bytes();
        let target = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let mut req = Self::new(method, target).with_body(body);
        req.headers = parts
            .headers
            .iter()
            .filter_map(|(k, v)| {
                v.to_str()
                    .ok()
                    .map(|v| (k.as_str().to_owned(), v.to_owned()))
            })
            .collect();
        Ok(req)
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/posts/{id}`, `req.param("id")` on `/api/posts/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first decoded query value for `key`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_and_decodes_query() {
        let req = Request::new(Method::Get, "/api/posts/search?title=first+post&content=a%26b");
        assert_eq!(req.path(), "/api/posts/search");
        assert_eq!(req.query("title"), Some("first post"));
        assert_eq!(req.query("content"), Some("a&b"));
        assert_eq!(req.query("missing"), None);
    }

    #[test]
    fn first_query_value_wins() {
        let req = Request::new(Method::Get, "/x?sort=title&sort=content");
        assert_eq!(req.query("sort"), Some("title"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::new(Method::Post, "/x").with_header("Content-Type", "application/json");
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn json_body() {
        let req = Request::new(Method::Post, "/x").with_body(r#"{"a":1}"#);
        let value: serde_json::Value = req.json().unwrap();
        assert_eq!(value["a"], 1);
    }
}
