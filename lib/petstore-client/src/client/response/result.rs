use headers::{ContentType, Header};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, StatusCode};
use mime::Mime;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::output::Output;
use crate::client::ApiClientError;
use crate::client::media::{MediaType, select_accepts};
use crate::client::operation::OperationDescriptor;

/// A successful (2xx) response, with its body fully read.
///
/// The body is decoded on demand with [`body`](Self::body), using the codec
/// matching the response `Content-Type`.
#[derive(Debug, Clone)]
pub struct CallResult {
    operation_id: &'static str,
    status: StatusCode,
    headers: HeaderMap,
    media_type: Option<MediaType>,
    output: Output,
}

impl CallResult {
    pub(in crate::client) async fn new(
        operation: &OperationDescriptor,
        response: Response,
    ) -> Result<Self, ApiClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let media_type = Self::response_media_type(operation, &headers)?;
        let data = response.bytes().await?;
        let output = if status == StatusCode::NO_CONTENT {
            Output::Empty
        } else {
            Output::new(media_type, data.to_vec())
        };

        Ok(Self {
            operation_id: operation.operation_id,
            status,
            headers,
            media_type,
            output,
        })
    }

    /// Extracts and parses the Content-Type header.
    pub(in crate::client) fn extract_content_type(
        headers: &HeaderMap,
    ) -> Result<Option<ContentType>, ApiClientError> {
        let content_type = headers.get_all(CONTENT_TYPE).iter().collect::<Vec<_>>();
        if content_type.is_empty() {
            return Ok(None);
        }
        let content_type = ContentType::decode(&mut content_type.into_iter())?;
        Ok(Some(content_type))
    }

    /// The media type used to decode the body.
    ///
    /// A type outside the operation's `produces` list is only reported; the
    /// body is still decoded as declared. Without `Content-Type` the preferred
    /// accepted media type is assumed.
    pub(in crate::client) fn response_media_type(
        operation: &OperationDescriptor,
        headers: &HeaderMap,
    ) -> Result<Option<MediaType>, ApiClientError> {
        let Some(content_type) = Self::extract_content_type(headers)? else {
            let fallback = select_accepts(operation.produces).first().copied();
            debug!(operation = operation.operation_id, ?fallback, "no content type in response");
            return Ok(fallback);
        };
        let mime = Mime::from(content_type);
        let media_type = MediaType::from_mime(&mime);
        match media_type {
            Some(media_type) if operation.produces.contains(&media_type) => {}
            _ => warn!(
                operation = operation.operation_id,
                content_type = %mime,
                "response media type not declared by the operation"
            ),
        }
        Ok(media_type)
    }

    /// The operation id of the call.
    pub fn operation_id(&self) -> &'static str {
        self.operation_id
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The media type of the body, if known.
    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    /// The raw body.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Decodes the body.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be decoded into `T`.
    pub fn body<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        self.output.decode()
    }

    /// Decodes the body and keeps the status and headers.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be decoded into `T`.
    pub fn into_entity<T>(self) -> Result<ResponseEntity<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.output.decode()?;
        Ok(ResponseEntity {
            status: self.status,
            headers: self.headers,
            body,
        })
    }

    /// Decodes a collection body.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a collection of `T`.
    pub fn items<T>(&self) -> Result<Vec<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        self.output.decode_items()
    }

    /// Decodes a collection body and keeps the status and headers.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a collection of `T`.
    pub fn into_items_entity<T>(self) -> Result<ResponseEntity<Vec<T>>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let body = self.output.decode_items()?;
        Ok(ResponseEntity {
            status: self.status,
            headers: self.headers,
            body,
        })
    }
}

/// A decoded body with the response status and headers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntity<T> {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The decoded body.
    pub body: T,
}

impl<T> ResponseEntity<T> {
    /// Returns the decoded body.
    pub fn into_body(self) -> T {
        self.body
    }
}
