//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server stops accepting, closes idle keep-alive
//! connections, lets in-flight requests finish, and then returns from
//! [`Server::serve`]. Tests use
//! [`serve_with_shutdown`] to supply their own shutdown future instead.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::method::Method;
use crate::middleware::cors;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// ```rust,no_run
    /// use postbox::Server;
    /// let server = Server::bind(([0, 0, 0, 0], 5002).into());
    /// ```
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;
        serve_with_shutdown(listener, router, shutdown_signal()).await
    }
}

/// How long in-flight requests get to finish once shutdown starts.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Serves `router` on an already-bound `listener` until `signal` resolves,
/// then drains in-flight connections.
///
/// Every connection is watched by a [`GracefulShutdown`]. When the signal
/// fires, idle keep-alive connections are closed right away and busy ones
/// finish their current request first, so a pooled client cannot hold the
/// server open.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    router: Router,
    signal: impl Future<Output = ()>,
) -> Result<(), Error> {
    let addr = listener.local_addr()?;
    let router = Arc::new(router);

    info!(%addr, "postbox listening");

    // HTTP/1.1 or HTTP/2, whichever the client negotiates.
    let builder = ConnBuilder::new(TokioExecutor::new());
    let graceful = GracefulShutdown::new();
    let mut tasks = tokio::task::JoinSet::new();

    tokio::pin!(signal);

    loop {
        tokio::select! {
            // Check shutdown first so a signal stops accepting immediately,
            // even with connections still queued.
            biased;

            () = &mut signal => {
                info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                break;
            }

            res = listener.accept() => {
                let (stream, remote_addr) = match res {
                    Ok(v) => v,
                    Err(e) => {
                        error!("accept error: {e}");
                        continue;
                    }
                };

                let router = Arc::clone(&router);
                // Called once per request on the connection.
                let svc = service_fn(move |req| {
                    let router = Arc::clone(&router);
                    async move { dispatch(router, req).await }
                });

                let conn = builder.serve_connection(TokioIo::new(stream), svc).into_owned();
                let conn = graceful.watch(conn);

                tasks.spawn(async move {
                    if let Err(e) = conn.await {
                        error!(peer = %remote_addr, "connection error: {e}");
                    }
                });
            }

            // Reap finished connection tasks so the JoinSet stays bounded.
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
        }
    }

    drop(listener);

    tokio::select! {
        () = graceful.shutdown() => {}
        () = tokio::time::sleep(DRAIN_TIMEOUT) => {
            warn!(in_flight = tasks.len(), "drain timed out, aborting remaining connections");
            tasks.abort_all();
        }
    }
    while tasks.join_next().await.is_some() {}

    info!("postbox stopped");
    Ok(())
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// Every failure becomes a response, so hyper never sees an error.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, std::convert::Infallible> {
    let method = match req.method().as_str().parse::<Method>() {
        Ok(method) => method,
        Err(e) => {
            debug!("{e}");
            let res = Response::error(Status::MethodNotAllowed, "Method not allowed");
            return Ok(cors::apply(res).into_inner());
        }
    };

    let response = match Request::from_hyper(method, req).await {
        Ok(req) => router.handle(req).await,
        Err(e) => {
            error!("failed to read request body: {e}");
            cors::apply(Response::error(Status::BadRequest, "Failed to read request body"))
        }
    };

    Ok(response.into_inner())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT (Ctrl-C) the process receives.
/// On non-Unix platforms only Ctrl-C is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
