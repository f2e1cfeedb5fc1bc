//! Cross-origin resource sharing.
//!
//! Any origin may call the API. No credentials are involved, so the wildcard
//! origin is sufficient and no allow-list is kept.

use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::router::join_methods;
use crate::status::Status;

pub const ALLOW_ORIGIN: &str = "access-control-allow-origin";
pub const ALLOW_METHODS: &str = "access-control-allow-methods";
pub const ALLOW_HEADERS: &str = "access-control-allow-headers";
pub const MAX_AGE: &str = "access-control-max-age";

/// Adds the allow-origin header to an outgoing response.
pub fn apply(mut res: Response) -> Response {
    res.set_header(ALLOW_ORIGIN, "*");
    res
}

/// Answers an `OPTIONS` preflight with `204 No Content`.
///
/// The requested headers are echoed back; without a request list every
/// header is allowed.
pub fn preflight(req: &Request) -> Response {
    let headers = req
        .header("access-control-request-headers")
        .unwrap_or("*")
        .to_owned();
    Response::builder()
        .status(Status::NoContent)
        .header(ALLOW_METHODS, &join_methods(&Method::ALL))
        .header(ALLOW_HEADERS, &headers)
        .header(MAX_AGE, "86400")
        .no_body()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_echoes_requested_headers() {
        let req = Request::new(Method::Options, "/api/posts")
            .with_header("Access-Control-Request-Headers", "content-type");
        let res = apply(preflight(&req));
        assert_eq!(res.status_code(), 204);
        assert_eq!(res.header(ALLOW_HEADERS), Some("content-type"));
        assert_eq!(res.header(ALLOW_ORIGIN), Some("*"));
        assert!(res.header(ALLOW_METHODS).is_some_and(|m| m.contains("PUT")));
    }

    #[test]
    fn apply_does_not_duplicate_origin() {
        let res = apply(apply(Response::text("x")));
        let count = res
            .headers()
            .iter()
            .filter(|(k, _)| k == ALLOW_ORIGIN)
            .count();
        assert_eq!(count, 1);
    }
}
