//! Request-level errors and their HTTP mapping.

use tracing::debug;

use super::model::Field;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// Everything a post request can be rejected for.
///
/// `Display` is the client-facing message; it goes out verbatim as
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Request body must be JSON")]
    BodyNotJson,

    #[error("{} is required", .0.label())]
    MissingField(Field),

    #[error("{} must be a string", .0.label())]
    NotText(Field),

    #[error("Invalid sort field '{0}'. Allowed values: title, content")]
    InvalidSortField(String),

    #[error("Invalid sort direction '{0}'. Allowed values: asc, desc")]
    InvalidDirection(String),

    #[error("Post with id {0} not found")]
    NotFound(String),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed body or required field.
    ClientInput,
    /// An enumerated query parameter outside its allowed set.
    Validation,
    /// The referenced post does not exist.
    NotFound,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BodyNotJson | Self::MissingField(_) | Self::NotText(_) => ErrorKind::ClientInput,
            Self::InvalidSortField(_) | Self::InvalidDirection(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn status(&self) -> Status {
        match self.kind() {
            ErrorKind::ClientInput | ErrorKind::Validation => Status::BadRequest,
            ErrorKind::NotFound => Status::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!(kind = ?self.kind(), "rejected: {}", self);
        Response::error(self.status(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ApiError::MissingField(Field::Title).to_string(), "Title is required");
        assert_eq!(ApiError::MissingField(Field::Content).to_string(), "Content is required");
        assert_eq!(
            ApiError::NotFound("999".into()).to_string(),
            "Post with id 999 not found"
        );
        assert_eq!(
            ApiError::InvalidSortField("author".into()).to_string(),
            "Invalid sort field 'author'. Allowed values: title, content"
        );
    }

    #[test]
    fn allowed_sort_fields_in_message_match_field_set() {
        let listed = Field::ALL.map(Field::as_str).join(", ");
        assert!(ApiError::InvalidSortField(String::new()).to_string().ends_with(&listed));
    }

    #[test]
    fn statuses() {
        assert_eq!(ApiError::BodyNotJson.status(), Status::BadRequest);
        assert_eq!(ApiError::InvalidDirection("up".into()).status(), Status::BadRequest);
        assert_eq!(ApiError::NotFound("1".into()).status(), Status::NotFound);
    }

    #[test]
    fn response_body() {
        let res = ApiError::NotFound("7".into()).into_response();
        assert_eq!(res.status_code(), 404);
        assert_eq!(res.body(), br#"{"error":"Post with id 7 not found"}"#);
    }
}
