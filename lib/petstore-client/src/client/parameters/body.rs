use headers::ContentType;
use serde::Serialize;

use crate::client::error::ApiClientError;
use crate::client::media::{MediaType, select_content_type};
use crate::client::operation::OperationDescriptor;

/// A type that can be sent as a request body.
///
/// `MEDIA_TYPES` lists the encodings the type supports, in preference order.
/// The request content type is the first media type consumed by the
/// operation that the body supports.
pub trait RequestBody: Serialize {
    /// Supported request media types.
    const MEDIA_TYPES: &'static [MediaType];
}

impl<T> RequestBody for &T
where
    T: RequestBody + ?Sized,
{
    const MEDIA_TYPES: &'static [MediaType] = T::MEDIA_TYPES;
}

/// Collections are only sent as JSON arrays.
impl<T> RequestBody for Vec<T>
where
    T: RequestBody,
{
    const MEDIA_TYPES: &'static [MediaType] = &[MediaType::Json];
}

impl<T> RequestBody for [T]
where
    T: RequestBody,
{
    const MEDIA_TYPES: &'static [MediaType] = &[MediaType::Json];
}

/// An encoded request body with its content type.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) media_type: MediaType,
    #[debug(ignore)]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Encodes a body for an operation.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::UnsupportedMediaType`] when the operation
    /// consumes none of the media types supported by the body, or when the
    /// encoding itself fails.
    pub fn encode<B>(operation: &OperationDescriptor, body: &B) -> Result<Self, ApiClientError>
    where
        B: RequestBody + ?Sized,
    {
        let Some(media_type) = select_content_type(operation.consumes, B::MEDIA_TYPES) else {
            return Err(ApiClientError::UnsupportedMediaType {
                operation: operation.operation_id,
                candidates: operation
                    .consumes
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            });
        };
        let data = media_type.encode(body)?;
        Ok(Self { media_type, data })
    }

    /// A form-encoded body built from [`CallForm`](super::CallForm) fields.
    pub(in crate::client) fn form(data: Vec<u8>) -> Self {
        Self {
            media_type: MediaType::FormUrlEncoded,
            data,
        }
    }

    /// The selected request media type.
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub(in crate::client) fn content_type(&self) -> ContentType {
        self.media_type.content_type()
    }

    /// The encoded bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
