use std::fmt;

use headers::ContentType;
use http::HeaderValue;
use mime::Mime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ApiClientError;

/// Media types understood by the client codecs.
///
/// Operation descriptors list their accepted media types as ordered slices of
/// this enum; selection is always first-match-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `application/json`
    Json,
    /// `application/xml`
    Xml,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
    /// `text/plain`
    Text,
    /// `application/octet-stream`
    OctetStream,
}

impl MediaType {
    /// Media types the client can decode a response from, in preference order.
    pub const DECODABLE: &'static [Self] = &[Self::Json, Self::Xml, Self::Text];

    /// The canonical media type string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Text => "text/plain",
            Self::OctetStream => "application/octet-stream",
        }
    }

    /// The media type as a `Content-Type` header.
    pub fn content_type(self) -> ContentType {
        match self {
            Self::Json => ContentType::json(),
            Self::Xml => ContentType::xml(),
            Self::FormUrlEncoded => ContentType::form_url_encoded(),
            Self::Text => ContentType::text(),
            Self::OctetStream => ContentType::octet_stream(),
        }
    }

    /// Classifies a parsed `Content-Type`.
    ///
    /// Parameters such as `charset` are ignored, `+json`/`+xml` suffixes are
    /// recognised, and `text/xml` is treated as XML.
    pub fn from_mime(mime: &Mime) -> Option<Self> {
        let (type_, subtype, suffix) = (mime.type_(), mime.subtype(), mime.suffix());
        let result = if suffix == Some(mime::JSON)
            || (type_ == mime::APPLICATION && subtype == mime::JSON)
        {
            Self::Json
        } else if suffix == Some(mime::XML)
            || ((type_ == mime::APPLICATION || type_ == mime::TEXT) && subtype == mime::XML)
        {
            Self::Xml
        } else if type_ == mime::APPLICATION && subtype == mime::WWW_FORM_URLENCODED {
            Self::FormUrlEncoded
        } else if type_ == mime::APPLICATION && subtype == mime::OCTET_STREAM {
            Self::OctetStream
        } else if type_ == mime::TEXT {
            Self::Text
        } else {
            return None;
        };
        Some(result)
    }

    /// Encodes a value with the codec bound to this media type.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be represented in this media type
    /// (e.g. nested structures as form data).
    pub fn encode<T>(self, value: &T) -> Result<Vec<u8>, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = match self {
            Self::Json => serde_json::to_vec(value)?,
            Self::Xml => serde_xml_rs::to_string(&value)?.into_bytes(),
            Self::FormUrlEncoded => serde_urlencoded::to_string(value)
                .map_err(|err| ApiClientError::SerializationError {
                    message: format!("Failed to serialize form data: {err}"),
                })?
                .into_bytes(),
            Self::Text | Self::OctetStream => {
                return Err(ApiClientError::SerializationError {
                    message: format!("no codec to encode {self}"),
                });
            }
        };
        Ok(data)
    }

    /// Decodes a value with the codec bound to this media type.
    ///
    /// # Errors
    ///
    /// Fails when the body does not match the expected shape.
    pub fn decode<T>(self, body: &str) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Json => {
                let deserializer = &mut serde_json::Deserializer::from_str(body);
                serde_path_to_error::deserialize(deserializer).map_err(|err| {
                    ApiClientError::JsonError {
                        path: err.path().to_string(),
                        error: err.into_inner(),
                        body: body.to_string(),
                    }
                })
            }
            Self::Xml => {
                let result = serde_xml_rs::from_str(body)?;
                Ok(result)
            }
            // a text body is a single string scalar
            Self::Text => {
                let value = serde_json::Value::String(body.to_string());
                let result = serde_json::from_value(value)?;
                Ok(result)
            }
            Self::FormUrlEncoded | Self::OctetStream => {
                Err(ApiClientError::SerializationError {
                    message: format!("no codec to decode {self}"),
                })
            }
        }
    }

    /// Decodes a collection body.
    ///
    /// An XML collection is the list of children of the root element,
    /// whatever the root element is named.
    ///
    /// # Errors
    ///
    /// Fails when the body is not a collection of `T`.
    pub fn decode_items<T>(self, body: &str) -> Result<Vec<T>, ApiClientError>
    where
        T: DeserializeOwned,
    {
        match self {
            Self::Xml => {
                let XmlItems { items } = serde_xml_rs::from_str(body)?;
                Ok(items)
            }
            _ => self.decode(body),
        }
    }
}

/// Root element wrapping the children of an XML collection document.
#[derive(Deserialize)]
struct XmlItems<T> {
    #[serde(rename = "#content", default = "Vec::new")]
    items: Vec<T>,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the request content type: the first of `consumes` the body supports.
///
/// An operation without declared request media types falls back to the
/// first media type supported by the body.
pub(in crate::client) fn select_content_type(
    consumes: &[MediaType],
    supported: &[MediaType],
) -> Option<MediaType> {
    if consumes.is_empty() {
        return supported.first().copied();
    }
    consumes
        .iter()
        .copied()
        .find(|media| supported.contains(media))
}

/// Builds the ordered accept list from the operation's `produces` list.
///
/// Only decodable media types are kept; JSON (the preferred codec) goes first,
/// the others keep the descriptor order.
pub(in crate::client) fn select_accepts(produces: &[MediaType]) -> Vec<MediaType> {
    let mut result: Vec<MediaType> = produces
        .iter()
        .copied()
        .filter(|media| MediaType::DECODABLE.contains(media))
        .collect();
    result.sort_by_key(|media| *media != MediaType::Json);
    result
}

/// Formats the accept list as an `Accept` header value.
pub(in crate::client) fn accept_header(
    accepts: &[MediaType],
) -> Result<Option<HeaderValue>, ApiClientError> {
    if accepts.is_empty() {
        return Ok(None);
    }
    let value = accepts
        .iter()
        .map(|media| media.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let value = HeaderValue::from_str(&value)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: i64,
        name: String,
    }

    #[rstest]
    #[case("application/json", Some(MediaType::Json))]
    #[case("application/json; charset=utf-8", Some(MediaType::Json))]
    #[case("application/problem+json", Some(MediaType::Json))]
    #[case("application/xml", Some(MediaType::Xml))]
    #[case("text/xml", Some(MediaType::Xml))]
    #[case("text/plain; charset=utf-8", Some(MediaType::Text))]
    #[case("application/x-www-form-urlencoded", Some(MediaType::FormUrlEncoded))]
    #[case("image/png", None)]
    fn should_classify_content_type(#[case] raw: &str, #[case] expected: Option<MediaType>) {
        let mime: Mime = raw.parse().expect("valid mime");
        assert_eq!(MediaType::from_mime(&mime), expected);
    }

    #[test]
    fn should_select_first_consumed_type_supported_by_body() {
        let consumes = [
            MediaType::Json,
            MediaType::Xml,
            MediaType::FormUrlEncoded,
        ];

        let selected = select_content_type(&consumes, &[MediaType::FormUrlEncoded, MediaType::Xml]);

        assert_eq!(selected, Some(MediaType::Xml));
    }

    #[test]
    fn should_not_select_content_type_without_intersection() {
        let selected = select_content_type(&[MediaType::Json], &[MediaType::Xml]);

        assert_eq!(selected, None);
    }

    #[test]
    fn should_fallback_to_body_preference_without_consumes() {
        let selected = select_content_type(&[], &[MediaType::Json, MediaType::Xml]);

        assert_eq!(selected, Some(MediaType::Json));
    }

    #[test]
    fn should_list_all_accepts_json_first() {
        let accepts = select_accepts(&[MediaType::Xml, MediaType::Json]);
        assert_eq!(accepts, vec![MediaType::Json, MediaType::Xml]);

        let header = accept_header(&accepts)
            .expect("valid header")
            .expect("some header");
        insta::assert_snapshot!(header.to_str().expect("ascii"), @"application/json, application/xml");
    }

    #[test]
    fn should_not_send_accept_without_produces() {
        let header = accept_header(&select_accepts(&[])).expect("valid header");

        assert!(header.is_none());
    }

    #[test]
    fn should_decode_text_as_string_scalar() {
        let token: String = MediaType::Text
            .decode("logged in user session:1234")
            .expect("decoded");

        assert_eq!(token, "logged in user session:1234");
    }

    #[test]
    fn should_report_json_path_on_decode_failure() {
        let result = MediaType::Json.decode::<Item>(r#"{"id":"one","name":"x"}"#);

        let Err(ApiClientError::JsonError { path, .. }) = result else {
            panic!("expected a JSON error, got {result:?}");
        };
        assert_eq!(path, "id");
    }

    #[test]
    fn should_encode_value_as_xml() {
        let item = Item {
            id: 7,
            name: "Rex".to_string(),
        };

        let data = MediaType::Xml.encode(&item).expect("encoded");

        assert!(String::from_utf8_lossy(&data).ends_with("<Item><id>7</id><name>Rex</name></Item>"));
    }

    #[test]
    fn should_encode_flat_value_as_form() {
        let item = Item {
            id: 7,
            name: "Rex the dog".to_string(),
        };

        let data = MediaType::FormUrlEncoded.encode(&item).expect("encoded");

        assert_eq!(String::from_utf8_lossy(&data), "id=7&name=Rex+the+dog");
    }

    #[test]
    fn should_decode_empty_json_null_as_unit_and_none() {
        MediaType::Json.decode::<()>("null").expect("unit");
        let value: Option<Item> = MediaType::Json.decode("null").expect("none");

        assert_eq!(value, None);
    }
}
