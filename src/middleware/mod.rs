//! Middleware layer.
//!
//! Cross-cutting concerns applied by [`Router::handle`](crate::Router::handle)
//! around every request, whether it reached a handler or not:
//!
//! - [`cors`]: permissive cross-origin headers and `OPTIONS` preflight
//! - [`trace`]: per-request span with method, path, status, latency

pub mod cors;
pub mod trace;
