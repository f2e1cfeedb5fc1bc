//! Per-request tracing.

use std::time::Instant;

use tracing::{Span, info, info_span};

use crate::response::Response;

/// Opens the span every log line of a request is recorded under.
pub fn span(method: &str, path: &str) -> Span {
    info_span!("request", %method, %path)
}

/// Emits the one-line summary of a finished request.
pub fn finish(res: &Response, started: Instant) {
    info!(
        status = res.status_code(),
        latency_us = started.elapsed().as_micros() as u64,
        "request completed"
    );
}
