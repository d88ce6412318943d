use std::time::Duration;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE};
use http::Method;
use rstest::rstest;
use serde::Serialize;

use crate::client::{
    ApiClient, ApiClientError, MediaType, OperationDescriptor, ParameterSpec, RequestBody,
    SecurityScheme,
};

static UPDATE_SETTINGS: OperationDescriptor = OperationDescriptor {
    operation_id: "updateSettings",
    method: Method::PUT,
    path: "/settings/{owner}",
    produces: &[MediaType::Xml, MediaType::Json],
    consumes: &[MediaType::Json, MediaType::FormUrlEncoded],
    parameters: &[
        ParameterSpec::path("owner"),
        ParameterSpec::query("tags").multi(),
        ParameterSpec::query("kinds"),
        ParameterSpec::header("X-Trace"),
        ParameterSpec::cookie("session"),
        ParameterSpec::form("name"),
        ParameterSpec::body("settings").required(),
    ],
    security: &[SecurityScheme::PetstoreAuth],
};

static PING: OperationDescriptor = OperationDescriptor {
    operation_id: "ping",
    method: Method::GET,
    path: "/ping",
    produces: &[MediaType::Text],
    consumes: &[],
    parameters: &[],
    security: &[],
};

#[derive(Debug, Serialize)]
struct Settings {
    theme: &'static str,
}

impl RequestBody for Settings {
    const MEDIA_TYPES: &'static [MediaType] = &[MediaType::Xml, MediaType::Json];
}

fn client() -> ApiClient {
    ApiClient::builder()
        .with_base_url("http://localhost:8080/api/v3")
        .expect("valid url")
        .with_api_key("special-key")
        .with_bearer_token("access-token")
        .build()
        .expect("client")
}

#[test]
fn should_build_complete_request() {
    let request = client()
        .call(&UPDATE_SETTINGS)
        .with_path_param("owner", "john")
        .with_query_param("tags", ["a", "b"])
        .with_query_param("kinds", ["x", "y"])
        .with_header("X-Trace", 42)
        .with_cookie("session", "abc")
        .with_body(&Settings { theme: "dark" })
        .expect("body")
        .into_request()
        .expect("request");

    assert_eq!(request.method(), Method::PUT);
    insta::assert_snapshot!(
        request.url(),
        @"http://localhost:8080/api/v3/settings/john?tags=a&tags=b&kinds=x%2Cy"
    );

    let headers = request.headers();
    assert_eq!(
        headers.get(ACCEPT).expect("accept"),
        "application/json, application/xml"
    );
    assert_eq!(
        headers.get(CONTENT_TYPE).expect("content type"),
        "application/json"
    );
    assert_eq!(headers.get("X-Trace").expect("header"), "42");
    assert_eq!(headers.get(COOKIE).expect("cookie"), "session=abc");
    assert_eq!(
        headers.get(AUTHORIZATION).expect("authorization"),
        "Bearer access-token"
    );
    assert!(headers.get("api_key").is_none());
}

#[test]
fn should_accept_text_for_plain_operations() {
    let request = client()
        .call(&PING)
        .into_request()
        .expect("request");

    assert_eq!(request.headers().get(ACCEPT).expect("accept"), "text/plain");
    assert!(request.headers().get(AUTHORIZATION).is_none());
    assert!(request.headers().get("api_key").is_none());
}

#[rstest]
#[case::absent(None)]
#[case::null(Some(None))]
fn should_fail_on_missing_path_param(#[case] owner: Option<Option<&str>>) {
    let call = client().call(&UPDATE_SETTINGS);
    let call = match owner {
        Some(owner) => call.with_path_param("owner", owner),
        None => call,
    };

    let error = call
        .with_body(&Settings { theme: "dark" })
        .expect("body")
        .into_request()
        .expect_err("owner is required");

    assert_eq!(
        error.to_string(),
        "Missing the required parameter 'owner' when calling updateSettings"
    );
    assert!(error.is_missing_parameter());
}

#[test]
fn should_fail_on_missing_required_body() {
    let error = client()
        .call(&UPDATE_SETTINGS)
        .with_path_param("owner", "john")
        .into_request()
        .expect_err("body is required");

    assert!(matches!(
        error,
        ApiClientError::MissingParameter {
            operation: "updateSettings",
            ref parameter,
        } if parameter == "settings"
    ));
}

#[test]
fn should_send_form_fields_as_body() {
    let request = client()
        .call(&UPDATE_SETTINGS)
        .with_path_param("owner", "john")
        .with_form_field("name", "Rex the dog")
        .into_request()
        .expect("request");

    assert_eq!(
        request.headers().get(CONTENT_TYPE).expect("content type"),
        "application/x-www-form-urlencoded"
    );
    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .expect("buffered body");
    insta::assert_snapshot!(String::from_utf8_lossy(body), @"name=Rex+the+dog");
}

#[test]
fn should_prefer_body_over_form_fields() {
    let request = client()
        .call(&UPDATE_SETTINGS)
        .with_path_param("owner", "john")
        .with_form_field("name", "ignored")
        .with_body(&Settings { theme: "dark" })
        .expect("body")
        .into_request()
        .expect("request");

    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .expect("buffered body");
    insta::assert_snapshot!(String::from_utf8_lossy(body), @r#"{"theme":"dark"}"#);
}

#[test]
fn should_reject_body_without_common_media_type() {
    #[derive(Debug, Serialize)]
    struct Note(&'static str);

    impl RequestBody for Note {
        const MEDIA_TYPES: &'static [MediaType] = &[MediaType::Text];
    }

    let error = client()
        .call(&UPDATE_SETTINGS)
        .with_body(&Note("hello"))
        .expect_err("text is not consumed");

    assert!(matches!(
        error,
        ApiClientError::UnsupportedMediaType {
            operation: "updateSettings",
            ..
        }
    ));
}

#[test]
fn should_apply_call_timeout() {
    let request = client()
        .call(&PING)
        .with_timeout(Duration::from_millis(250))
        .into_request()
        .expect("request");

    assert_eq!(request.timeout(), Some(&Duration::from_millis(250)));
}

#[test]
fn should_drop_credentials_when_asked() {
    let request = client()
        .call(&UPDATE_SETTINGS)
        .with_path_param("owner", "john")
        .with_body(&Settings { theme: "dark" })
        .expect("body")
        .without_authentication()
        .into_request()
        .expect("request");

    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn should_join_base_path_and_operation_path() {
    let client = ApiClient::builder()
        .with_base_url("http://localhost:8080/api/v3/")
        .expect("valid url")
        .build()
        .expect("client");

    let request = client.call(&PING).into_request().expect("request");

    insta::assert_snapshot!(request.url(), @"http://localhost:8080/api/v3/ping");
}
