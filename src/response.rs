//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it, or return anything that
//! implements [`IntoResponse`]: a [`Status`], a [`Json`] value, a
//! `(Status, impl IntoResponse)` pair, or a `Result` of two of those.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http_body_util::Full;
use serde::Serialize;

use crate::status::Status;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use postbox::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("hello");
/// Response::status(Status::NoContent);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use postbox::{Response, Status};
///
/// Response::builder()
///     .status(Status::Created)
///     .header("location", "/api/posts/3")
///     .json(br#"{"id":3}"#.to_vec());
/// ```
#[derive(Debug, Clone)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` with `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::bytes_raw(JSON, body)
    }

    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::bytes_raw(TEXT, body.into().into_bytes())
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), headers: Vec::new(), status: code.into() }
    }

    /// JSON error body `{"error": "<message>"}` with the given status.
    pub fn error(code: Status, message: impl Into<String>) -> Self {
        let mut res = Json(ErrorBody { error: message.into() }).into_response();
        res.status = code.into();
        res
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    fn bytes_raw(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            body,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            status: Status::Ok.into(),
        }
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
    }

    /// Converts into the hyper representation written to the wire.
    ///
    /// Headers that are not valid HTTP tokens are skipped. hyper derives
    /// `content-length` from the full body.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = http::StatusCode::from_u16(self.status)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        for (name, value) in self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                res.headers_mut().append(name, value);
            }
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        self.finish(JSON, body)
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(TEXT, body.into().into_bytes())
    }

    /// Terminate with no body (e.g. `Status::NoContent`).
    pub fn no_body(self) -> Response {
        Response { body: Vec::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}

/// Overrides the status of any other response: `(Status::Created, Json(post))`
impl<R: IntoResponse> IntoResponse for (Status, R) {
    fn into_response(self) -> Response {
        let mut res = self.1.into_response();
        res.status = self.0.into();
        res
    }
}

impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }
}

// ── Json ─────────────────────────────────────────────────────────────────────

/// A typed JSON body, serialized with serde when the response is built.
///
/// ```rust
/// use postbox::{IntoResponse, Json};
///
/// let res = Json(serde_json::json!({"id": 1})).into_response();
/// assert_eq!(res.status_code(), 200);
/// assert_eq!(res.body(), br#"{"id":1}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json<T>(pub T);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                tracing::error!("failed to serialize response body: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_pair_overrides_status_and_keeps_body() {
        let res = (Status::Created, Json(vec![1, 2])).into_response();
        assert_eq!(res.status_code(), 201);
        assert_eq!(res.header("content-type"), Some(JSON));
        assert_eq!(res.body(), b"[1,2]");
    }

    #[test]
    fn error_body_shape() {
        let res = Response::error(Status::BadRequest, "Title is required");
        assert_eq!(res.status_code(), 400);
        assert_eq!(res.body(), br#"{"error":"Title is required"}"#);
    }

    #[test]
    fn result_picks_the_matching_arm() {
        let ok: Result<Status, Status> = Ok(Status::Ok);
        let err: Result<Status, Status> = Err(Status::NotFound);
        assert_eq!(ok.into_response().status_code(), 200);
        assert_eq!(err.into_response().status_code(), 404);
    }

    #[test]
    fn set_header_replaces_existing_value() {
        let mut res = Response::text("x");
        res.set_header("Content-Type", JSON);
        assert_eq!(res.headers().len(), 1);
        assert_eq!(res.header("content-type"), Some(JSON));
    }

    #[test]
    fn into_inner_carries_status_and_headers() {
        let res = Response::builder()
            .status(Status::NotFound)
            .header("x-test", "1")
            .text("missing")
            .into_inner();
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(res.headers()["x-test"], "1");
        assert_eq!(res.headers()["content-type"], TEXT);
    }
}
