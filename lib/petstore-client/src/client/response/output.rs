use std::any::type_name;

use serde::de::DeserializeOwned;

use crate::client::ApiClientError;
use crate::client::media::MediaType;

/// A response body, classified by its `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Output {
    /// No body (204, or empty content).
    Empty,
    /// A JSON document.
    Json(String),
    /// An XML document.
    Xml(String),
    /// A `text/*` body.
    Text(String),
    /// Any other body.
    Bytes(Vec<u8>),
}

impl Output {
    pub(in crate::client) fn new(media_type: Option<MediaType>, data: Vec<u8>) -> Self {
        if data.is_empty() {
            return Self::Empty;
        }
        match media_type {
            Some(MediaType::Json) => Self::Json(String::from_utf8_lossy(&data).into_owned()),
            Some(MediaType::Xml) => Self::Xml(String::from_utf8_lossy(&data).into_owned()),
            Some(MediaType::Text) => Self::Text(String::from_utf8_lossy(&data).into_owned()),
            _ => Self::Bytes(data),
        }
    }

    /// Decodes the body with the codec of its media type.
    ///
    /// An empty body decodes like a JSON `null`, so unit and `Option` targets succeed.
    ///
    /// # Errors
    ///
    /// Fails when the body cannot be decoded into `T`.
    pub fn decode<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Empty => MediaType::Json.decode("null"),
            Self::Json(json) => MediaType::Json.decode(json),
            Self::Xml(xml) => MediaType::Xml.decode(xml),
            Self::Text(text) => MediaType::Text.decode(text),
            Self::Bytes(_) => Err(ApiClientError::UnsupportedOutput {
                output: self.clone(),
                name: type_name::<T>(),
            }),
        }
    }

    /// Decodes a collection body, element by element for XML.
    ///
    /// An empty body is an empty collection.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a collection of `T`.
    pub fn decode_items<T>(&self) -> Result<Vec<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Json(json) => MediaType::Json.decode_items(json),
            Self::Xml(xml) => MediaType::Xml.decode_items(xml),
            Self::Text(text) => MediaType::Text.decode_items(text),
            Self::Bytes(_) => Err(ApiClientError::UnsupportedOutput {
                output: self.clone(),
                name: type_name::<Vec<T>>(),
            }),
        }
    }

    /// The raw body as text, if it is not binary.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(text) | Self::Xml(text) | Self::Text(text) => Some(text),
            Self::Empty => Some(""),
            Self::Bytes(_) => None,
        }
    }
}
