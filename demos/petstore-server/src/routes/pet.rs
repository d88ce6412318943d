use std::sync::Arc;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use serde::Deserialize;

use petstore_client::model::{Pet, PetStatus};

use crate::delegate::PetApiDelegate;
use crate::errors::ApiError;
use crate::extractors::{AnyFormat, ApiPath, ApiQuery, ResponseFormat};

pub(crate) fn pet_router<D>(delegate: Arc<D>) -> Router
where
    D: PetApiDelegate,
{
    Router::new()
        .route("/pet", post(add_pet::<D>).put(update_pet::<D>))
        .route("/pet/findByStatus", get(find_pets_by_status::<D>))
        .route("/pet/findByTags", get(find_pets_by_tags::<D>))
        .route(
            "/pet/{petId}",
            get(get_pet_by_id::<D>)
                .post(update_pet_with_form::<D>)
                .delete(delete_pet::<D>),
        )
        .with_state(delegate)
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: Option<PetStatus>,
}

#[derive(Debug, Deserialize)]
struct UpdateQuery {
    name: Option<String>,
    status: Option<String>,
}

async fn add_pet<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    AnyFormat(pet): AnyFormat<Pet>,
) -> Result<Response, ApiError>
where
    D: PetApiDelegate,
{
    let pet = delegate.add_pet(pet).await?;
    Ok(format.ok(&pet))
}

async fn update_pet<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    AnyFormat(pet): AnyFormat<Pet>,
) -> Result<Response, ApiError>
where
    D: PetApiDelegate,
{
    let pet = delegate.update_pet(pet).await?;
    Ok(format.ok(&pet))
}

async fn find_pets_by_status<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    ApiQuery(query): ApiQuery<StatusQuery>,
) -> Result<Response, ApiError>
where
    D: PetApiDelegate,
{
    let pets = delegate.find_pets_by_status(query.status).await?;
    Ok(format.ok_items(&pets))
}

async fn find_pets_by_tags<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError>
where
    D: PetApiDelegate,
{
    let tags = repeated_values(query.as_deref().unwrap_or_default(), "tags")?;
    let pets = delegate.find_pets_by_tags(tags).await?;
    Ok(format.ok_items(&pets))
}

async fn get_pet_by_id<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    ApiPath(pet_id): ApiPath<i64>,
) -> Result<Response, ApiError>
where
    D: PetApiDelegate,
{
    let pet = delegate.get_pet_by_id(pet_id).await?;
    Ok(format.ok(&pet))
}

async fn update_pet_with_form<D>(
    State(delegate): State<Arc<D>>,
    ApiPath(pet_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<UpdateQuery>,
) -> Result<StatusCode, ApiError>
where
    D: PetApiDelegate,
{
    delegate
        .update_pet_with_form(pet_id, query.name, query.status)
        .await?;
    Ok(StatusCode::OK)
}

async fn delete_pet<D>(
    State(delegate): State<Arc<D>>,
    ApiPath(pet_id): ApiPath<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
    D: PetApiDelegate,
{
    let api_key = headers
        .get("api_key")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    delegate.delete_pet(pet_id, api_key).await?;
    Ok(StatusCode::OK)
}

/// Values of a repeated query key, in request order.
fn repeated_values(query: &str, key: &str) -> Result<Vec<String>, ApiError> {
    let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query)
        .map_err(|err| ApiError::bad_request(format!("invalid query: {err}")))?;
    let values = pairs
        .into_iter()
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value)
        .collect();
    Ok(values)
}
