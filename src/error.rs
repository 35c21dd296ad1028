//! Error types.

use crate::data::{ErrorDetail, RequestId};

use std::error::Error as StdError;
use std::fmt;

/// Type alias for a boxed [`std::error::Error`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Type alias for a [`Result`](std::result::Result) with this crate's [`Error`] as the default
/// error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type returned by models, enums and services in this crate.
///
/// Inspect [`Error::kind`] to classify the failure, or [`Error::find_source`] to get at the
/// underlying error (e.g., [`MissingRequiredFieldError`] or [`ApiError`]).
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

/// Categories of [`Error`].
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// invalid data
    InvalidData,
    /// missing required field
    MissingRequiredField,
    /// failed to deserialize JSON
    Deserialization,
    /// failed to serialize JSON
    Serialization,
    /// received error response from the API
    Api,
    /// underlying transport failed
    Transport,
    /// other error
    Other,
}

/// A value did not match what the API schema allows (e.g., an unrecognized enum value).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidDataError {
    /// Description of the problem.
    pub message: String,
}

impl InvalidDataError {
    /// Creates a new [`InvalidDataError`].
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A field marked as required by the API schema has no value.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required field `{field}`")]
pub struct MissingRequiredFieldError {
    /// The JSON key of the missing field.
    pub field: &'static str,
}

/// A declared field had a JSON value of the wrong shape.
#[derive(thiserror::Error, Debug)]
#[error("field `{field}`: {source}")]
pub struct FieldDecodeError {
    /// The JSON key of the field.
    pub field: String,
    /// The underlying error.
    #[source]
    pub source: serde_json::Error,
}

/// A non-success HTTP response returned by the Straddle API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The HTTP status code.
    pub status: u16,
    /// The `Request-Id` response header, if any.
    pub request_id: Option<RequestId>,
    /// The parsed `error` object of the response body, if the body had one.
    pub error: Option<ErrorDetail>,
    /// The raw response body.
    pub body: String,
}

impl ApiError {
    /// The human-readable error title, if the response contained one.
    pub fn title(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.title())
            .map(String::as_str)
    }

    /// Returns `true` if the status code is `401 Unauthorized` or `403 Forbidden`.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Returns `true` if the status code is `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;

        if let Some(detail) = &self.error {
            if let Some(title) = detail.title() {
                write!(f, " ({})", title)?;
            }
            if let Some(text) = detail.detail() {
                write!(f, ": {}", text)?;
            }
        }

        if let Some(id) = &self.request_id {
            write!(f, " [request ID {}]", id)?;
        }

        Ok(())
    }
}

impl StdError for ApiError {}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorKind::Deserialization).with_source(error)
    }
}

impl From<InvalidDataError> for Error {
    fn from(error: InvalidDataError) -> Self {
        Self::new(ErrorKind::InvalidData).with_source(error)
    }
}

impl From<MissingRequiredFieldError> for Error {
    fn from(error: MissingRequiredFieldError) -> Self {
        Self::new(ErrorKind::MissingRequiredField).with_source(error)
    }
}

impl From<FieldDecodeError> for Error {
    fn from(error: FieldDecodeError) -> Self {
        Self::new(ErrorKind::Deserialization).with_source(error)
    }
}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        Self::new(ErrorKind::Api).with_source(error)
    }
}

impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Self {
        Self::new(ErrorKind::InvalidData).with_source(error)
    }
}

impl Error {
    /// Creates a new [`Error`] with no source.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Set this error's underlying `source`.
    pub fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Creates an [`ErrorKind::InvalidData`] error with the given message.
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        InvalidDataError::new(message).into()
    }

    /// Creates an [`ErrorKind::MissingRequiredField`] error for the given field.
    pub fn missing_field(field: &'static str) -> Self {
        MissingRequiredFieldError { field }.into()
    }

    /// Creates an [`ErrorKind::Deserialization`] error for a specific field.
    pub fn field_decode<S: Into<String>>(field: S, source: serde_json::Error) -> Self {
        FieldDecodeError {
            field: field.into(),
            source,
        }
        .into()
    }

    /// Creates an [`ErrorKind::Transport`] error wrapping the given source.
    pub fn transport<E: Into<BoxError>>(source: E) -> Self {
        Self::new(ErrorKind::Transport).with_source(source)
    }

    /// Convert a [`BoxError`] into this error type. If the underlying [`Error`](std::error::Error)
    /// is not this error type, a new [`Error`] is created with [`ErrorKind::Transport`].
    pub fn from_boxed(error: BoxError) -> Self {
        match error.downcast::<Self>() {
            Ok(e) => *e,
            Err(e) => Self::transport(e),
        }
    }

    /// Consumes the error, returning its source.
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the [`ApiError`] if this error was caused by a non-success API response.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        self.find_source::<ApiError>()
    }

    /// Returns `true` if this error was caused by a non-success API response.
    pub fn is_api_error(&self) -> bool {
        self.as_api_error().is_some()
    }

    /// Check if any error in this error's `source` chain match the given [`ErrorKind`].
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        if self.kind == kind {
            return true;
        }

        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<Self>() {
                Some(found) if found.kind == kind => return true,
                _ => source = e.source(),
            }
        }

        false
    }

    /// Recurse through this error's `source` chain, returning the first matching error type.
    pub fn find_source<E: StdError + 'static>(&self) -> Option<&E> {
        let mut source = self.source();

        while let Some(e) = source {
            match e.downcast_ref::<E>() {
                Some(found) => return Some(found),
                None => source = e.source(),
            }
        }

        None
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref source) = self.source {
            write!(f, "{}: {}", self.kind, source)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|cause| &**cause as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = Error::missing_field("name");
        assert_eq!(
            err.to_string(),
            "missing required field: missing required field `name`"
        );

        let err = Error::invalid_data("unrecognized enum value: nope");
        assert_eq!(
            err.to_string(),
            "invalid data: unrecognized enum value: nope"
        );
    }

    #[test]
    fn find_source() {
        let err = Error::missing_field("status");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
        assert_eq!(
            err.find_source::<MissingRequiredFieldError>(),
            Some(&MissingRequiredFieldError { field: "status" })
        );
        assert!(err.find_source::<InvalidDataError>().is_none());
    }

    #[test]
    fn from_boxed() {
        let boxed: BoxError = Box::new(Error::invalid_data("bad"));
        assert_eq!(Error::from_boxed(boxed).kind(), ErrorKind::InvalidData);

        let boxed: BoxError = "connection reset".into();
        let err = Error::from_boxed(boxed);
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "underlying transport failed: connection reset");
    }

    #[test]
    fn has_kind_nested() {
        let inner = Error::invalid_data("bad");
        let outer = Error::new(ErrorKind::Other).with_source(inner);
        assert!(outer.has_kind(ErrorKind::Other));
        assert!(outer.has_kind(ErrorKind::InvalidData));
        assert!(!outer.has_kind(ErrorKind::Api));
    }
}
