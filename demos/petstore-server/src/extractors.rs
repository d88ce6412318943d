//! Content negotiation: request bodies by `Content-Type`, responses by `Accept`.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

const APPLICATION_JSON: &str = "application/json";
const APPLICATION_XML: &str = "application/xml";
const TEXT_XML: &str = "text/xml";
const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// Request body decoded according to its `Content-Type`: JSON, XML or form.
pub struct AnyFormat<T>(pub T);

impl<S, T> FromRequest<S> for AnyFormat<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let OptionalBody(body) = OptionalBody::from_request(req, state).await?;
        body.map(Self)
            .ok_or_else(|| ApiError::bad_request("missing request body"))
    }
}

/// Like [`AnyFormat`], but an empty body is `None`.
pub struct OptionalBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for OptionalBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(None));
        }
        decode_body(&content_type, &bytes).map(|value| Self(Some(value)))
    }
}

fn content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub(crate) fn decode_body<T>(content_type: &str, bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    match content_type {
        ct if ct.starts_with(APPLICATION_JSON) => serde_json::from_slice(bytes)
            .map_err(|err| ApiError::bad_request(format!("invalid JSON body: {err}"))),
        ct if ct.starts_with(APPLICATION_XML) || ct.starts_with(TEXT_XML) => {
            serde_xml_rs::from_reader(bytes)
                .map_err(|err| ApiError::bad_request(format!("invalid XML body: {err}")))
        }
        ct if ct.starts_with(FORM_URL_ENCODED) => serde_urlencoded::from_bytes(bytes)
            .map_err(|err| ApiError::bad_request(format!("invalid form body: {err}"))),
        _ => Err(ApiError::UnsupportedMediaType {
            content_type: content_type.to_string(),
        }),
    }
}

/// Path parameters, rejected as an [`ApiError`].
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query parameters, rejected as an [`ApiError`].
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// The response media type chosen from the `Accept` header.
///
/// The first of JSON or XML listed wins; anything else falls back to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// `application/json`
    #[default]
    Json,
    /// `application/xml`
    Xml,
}

impl ResponseFormat {
    pub(crate) fn from_accept(accept: &str) -> Self {
        accept
            .split(',')
            .map(|value| value.split(';').next().unwrap_or_default().trim())
            .find_map(|value| match value {
                APPLICATION_JSON => Some(Self::Json),
                APPLICATION_XML | TEXT_XML => Some(Self::Xml),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Encodes the value with the given status.
    pub(crate) fn respond<T>(self, status: StatusCode, value: &T) -> Response
    where
        T: Serialize,
    {
        match self {
            Self::Json => (status, Json(value)).into_response(),
            Self::Xml => match serde_xml_rs::to_string(value) {
                Ok(xml) => (
                    status,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_XML))],
                    xml,
                )
                    .into_response(),
                Err(err) => ApiError::Internal {
                    message: format!("cannot write XML: {err}"),
                }
                .into_response(),
            },
        }
    }

    /// Encodes a collection with a `200 OK` status.
    ///
    /// XML collections are the children of an `<items>` root element.
    pub(crate) fn ok_items<T>(self, items: &[T]) -> Response
    where
        T: Serialize,
    {
        match self {
            Self::Json => self.respond(StatusCode::OK, &items),
            Self::Xml => self.respond(StatusCode::OK, &XmlItems { items }),
        }
    }

    /// Encodes the value with a `200 OK` status.
    pub(crate) fn ok<T>(self, value: &T) -> Response
    where
        T: Serialize,
    {
        self.respond(StatusCode::OK, value)
    }
}

#[derive(Serialize)]
#[serde(rename = "items")]
struct XmlItems<'a, T> {
    #[serde(rename = "#content")]
    items: &'a [T],
}

impl<S> FromRequestParts<S> for ResponseFormat
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let format = parts
            .headers
            .get(header::ACCEPT)
            .and_then(|accept| accept.to_str().ok())
            .map(Self::from_accept)
            .unwrap_or_default();
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use petstore_client::model::{Order, User};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::json_first("application/json, application/xml", ResponseFormat::Json)]
    #[case::xml_first("application/xml, application/json", ResponseFormat::Xml)]
    #[case::with_params("text/xml; charset=utf-8", ResponseFormat::Xml)]
    #[case::wildcard("*/*", ResponseFormat::Json)]
    #[case::unknown("text/plain", ResponseFormat::Json)]
    fn should_choose_response_format(#[case] accept: &str, #[case] expected: ResponseFormat) {
        assert_eq!(ResponseFormat::from_accept(accept), expected);
    }

    #[test]
    fn should_decode_json_body() {
        let user: User =
            decode_body("application/json", br#"{"username":"theUser"}"#).expect("user");

        assert_eq!(user, User::new("theUser"));
    }

    #[test]
    fn should_decode_form_body() {
        let order: Order = decode_body(
            "application/x-www-form-urlencoded",
            b"id=10&quantity=7&complete=true",
        )
        .expect("order");

        assert_eq!(order.id, Some(10));
        assert_eq!(order.quantity, Some(7));
        assert_eq!(order.complete, Some(true));
    }

    #[test]
    fn should_decode_xml_body() {
        let user: User = decode_body(
            "application/xml",
            b"<User><username>theUser</username></User>",
        )
        .expect("user");

        assert_eq!(user, User::new("theUser"));
    }

    #[test]
    fn should_reject_unknown_media_type() {
        let result = decode_body::<User>("text/csv", b"theUser");

        let error = result.expect_err("csv is not supported");
        assert_eq!(error.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn should_respond_xml_collection() {
        let response =
            ResponseFormat::Xml.ok_items(&[User::new("first"), User::new("second")]);

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/xml"))
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = String::from_utf8_lossy(&body);
        assert!(
            body.ends_with(
                "<items><User><username>first</username></User>\
                 <User><username>second</username></User></items>"
            ),
            "{body}"
        );
    }

    #[test]
    fn should_respond_json() {
        let response = ResponseFormat::Json.ok(&User::new("theUser"));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }
}
