#![allow(missing_docs)]

use axum::http::{Method, StatusCode};
use rstest::rstest;

use petstore_client::api::pet::GET_PET_BY_ID;
use petstore_client::api::store::GET_ORDER_BY_ID;
use petstore_client::api::{PetApi, StoreApi, UserApi};
use petstore_client::model::{Pet, PetStatus, User};
use petstore_client::{ApiClientError, MediaType, OperationDescriptor};

mod common;
pub use self::common::*;

static OPENAPI: OperationDescriptor = OperationDescriptor {
    operation_id: "openapi",
    method: Method::GET,
    path: "/openapi.json",
    produces: &[MediaType::Json],
    consumes: &[],
    parameters: &[],
    security: &[],
};

#[rstest]
#[tokio::test]
async fn should_get_example_pet(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let pet = PetApi::new(app.client.clone()).get_pet_by_id(1).await?;

    assert_eq!(pet.id, Some(1));
    assert_eq!(pet.name, "Bear");
    assert_eq!(pet.status, Some(PetStatus::Available));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_answer_not_found_for_unknown_pet(#[future] app: TestApp) {
    let app = app.await;

    let error = PetApi::new(app.client.clone())
        .get_pet_by_id(300)
        .await
        .expect_err("pet 300 does not exist");

    insta::assert_snapshot!(
        error,
        @r#"HTTP 404 Not Found: {"code":404,"message":"Pet 300 not found"}"#
    );
}

#[rstest]
#[tokio::test]
async fn should_answer_json_error_for_invalid_pet_id(#[future] app: TestApp) {
    let app = app.await;

    let error = app
        .client
        .call(&GET_PET_BY_ID)
        .with_path_param("petId", "not-a-number")
        .await
        .expect_err("pet id is not a number");

    let ApiClientError::HttpStatusFailure {
        status, headers, body, ..
    } = &error
    else {
        panic!("expected an HTTP failure, got {error:?}");
    };
    assert_eq!(*status, StatusCode::BAD_REQUEST);
    assert_eq!(
        headers.get("content-type").map(|value| value.as_bytes()),
        Some(b"application/json".as_slice())
    );
    assert!(body.starts_with(r#"{"code":400,"message":"#), "{body}");
}

#[rstest]
#[tokio::test]
async fn should_answer_not_implemented(#[future] app: TestApp) {
    let app = app.await;

    let error = PetApi::new(app.client.clone())
        .add_pet(&Pet::new("doggie"))
        .await
        .expect_err("addPet is not implemented");

    assert_eq!(error.status(), Some(StatusCode::NOT_IMPLEMENTED));
}

#[rstest]
#[tokio::test]
async fn should_hand_missing_user_to_delegate(#[future] app: TestApp) {
    let app = app.await;

    let error = UserApi::new(app.client.clone())
        .create_user(None)
        .await
        .expect_err("createUser is not implemented");

    assert_eq!(error.status(), Some(StatusCode::NOT_IMPLEMENTED));
}

#[rstest]
#[tokio::test]
async fn should_hand_user_list_to_delegate(#[future] app: TestApp) {
    let app = app.await;

    let error = UserApi::new(app.client.clone())
        .create_users_with_list_input(Some(&[User::new("u1")]))
        .await
        .expect_err("createUsersWithListInput is not implemented");

    assert_eq!(error.status(), Some(StatusCode::NOT_IMPLEMENTED));
}

#[rstest]
#[tokio::test]
async fn should_get_example_order_as_json(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let entity = StoreApi::new(app.client.clone())
        .get_order_by_id_with_http_info(1)
        .await?;

    assert_eq!(entity.status, StatusCode::OK);
    assert_eq!(
        entity.headers.get("content-type").and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    let order = entity.into_body();
    assert_eq!(order.id, Some(1));
    assert_eq!(order.quantity, Some(5));
    assert_eq!(order.complete, Some(false));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_get_example_order_as_xml(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let result = app
        .client
        .call(&GET_ORDER_BY_ID)
        .with_path_param("orderId", 1)
        .with_header("Accept", "application/xml")
        .await?;

    assert_eq!(result.media_type(), Some(MediaType::Xml));
    let order: petstore_client::model::Order = result.body()?;
    assert_eq!(order.id, Some(1));
    assert_eq!(order.quantity, Some(5));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_serve_openapi_schemas(#[future] app: TestApp) -> anyhow::Result<()> {
    let app = app.await;

    let doc: serde_json::Value = app.client.call(&OPENAPI).await?.body()?;

    let pet_schema = doc.pointer("/components/schemas/Pet/properties/name/type");
    assert_eq!(pet_schema.and_then(serde_json::Value::as_str), Some("string"));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn should_fail_before_sending_without_order_id(#[future] app: TestApp) {
    let app = app.await;

    let error = app
        .client
        .call(&GET_ORDER_BY_ID)
        .await
        .expect_err("orderId is required");

    assert!(matches!(error, ApiClientError::MissingParameter { .. }));
}
