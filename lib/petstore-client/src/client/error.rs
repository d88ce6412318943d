use std::fmt::Debug;

use http::{HeaderMap, StatusCode};

use super::auth::AuthenticationError;
use super::response::output::Output;

/// Errors that can occur when invoking a Petstore operation.
///
/// Three kinds matter to callers deciding on remediation:
///
/// - [`MissingParameter`](Self::MissingParameter): raised while building the request, nothing was sent
/// - [`TransportFailure`](Self::TransportFailure): the request never reached the peer (or the body stream broke)
/// - [`HttpStatusFailure`](Self::HttpStatusFailure): the peer answered with a non-2xx status
///
/// The other variants report local encoding or decoding problems.
/// The client never retries; retrying is up to the caller, usually only on
/// [`TransportFailure`](Self::TransportFailure).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// A required parameter was not supplied (or supplied as `null`).
    ///
    /// Raised before any network I/O.
    #[display("Missing the required parameter '{parameter}' when calling {operation}")]
    #[from(skip)]
    MissingParameter {
        /// The operation id.
        operation: &'static str,
        /// The missing parameter name.
        parameter: String,
    },

    /// Network-level failure from the underlying reqwest transport.
    ///
    /// Connection refused, timeouts, or a body stream interrupted mid-way.
    #[display("Transport failure: {_0}")]
    TransportFailure(reqwest::Error),

    /// The server answered with a non-2xx status code.
    ///
    /// The body is kept raw, it is never decoded into a domain error shape.
    #[display("HTTP {} {reason}: {body}", status.as_u16())]
    #[from(skip)]
    HttpStatusFailure {
        /// The HTTP status code.
        status: StatusCode,
        /// Reason phrase from the standard status registry.
        reason: &'static str,
        /// The response headers.
        headers: HeaderMap,
        /// The raw response body.
        body: String,
    },

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Response header processing error.
    HeadersError(headers::Error),

    /// Authentication data cannot be turned into a header.
    AuthenticationError(AuthenticationError),

    /// JSON encoding error.
    JsonValueError(serde_json::Error),

    /// XML encoding or decoding error.
    XmlError(serde_xml_rs::Error),

    /// JSON response deserialization failure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// The JSON path where the error occurred.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Data serialization failed.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },

    /// No request media type accepted by the operation is supported by the body.
    #[display("No supported content type for {operation}, candidates: {candidates:?}")]
    #[from(skip)]
    UnsupportedMediaType {
        /// The operation id.
        operation: &'static str,
        /// The media types the operation consumes.
        candidates: Vec<String>,
    },

    /// Response output cannot be decoded into the requested type.
    #[display("Unsupported output for {name}:\n{output:?}")]
    #[from(skip)]
    UnsupportedOutput {
        /// The actual response output received.
        output: Output,
        /// Name of the requested type.
        name: &'static str,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Parameter value cannot be converted to a string form.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// Specific error message describing the conversion failure.
        message: String,
        /// The value that failed to convert.
        value: serde_json::Value,
    },

    /// Invalid base URL configuration.
    #[display("Invalid base URL: {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// Description of why the base URL is invalid.
        error: String,
    },
}

impl ApiClientError {
    /// Returns `true` when the request never got an HTTP answer.
    ///
    /// This is the only kind of failure where a retry may make sense.
    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    /// Returns `true` when the failure happened before sending anything.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// The HTTP status for an [`HttpStatusFailure`](Self::HttpStatusFailure).
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatusFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(in crate::client) fn http_status_failure(
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    ) -> Self {
        Self::HttpStatusFailure {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown Status"),
            headers,
            body,
        }
    }
}
