//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |
//!
//! The post store lives in memory and is ready as soon as it is built, so
//! readiness has nothing to wait for.

use serde_json::{Value, json};

use crate::{Json, Request};

/// Liveness probe. Always `200 OK` with `{"status": "ok"}`.
pub async fn liveness(_req: Request) -> Json<Value> {
    Json(json!({"status": "ok"}))
}

/// Readiness probe. Always `200 OK` with `{"status": "ready"}`.
pub async fn readiness(_req: Request) -> Json<Value> {
    Json(json!({"status": "ready"}))
}
