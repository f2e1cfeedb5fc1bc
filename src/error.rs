//! Infrastructure error type.

/// The error type returned by the server's fallible operations.
///
/// Application-level failures (400, 404, ...) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// failures to bind the listening socket or to start serving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
