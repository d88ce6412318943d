use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use petstore_client::model::{Category, Order, OrderStatus, Pet, PetStatus, Tag, User};

use crate::delegate::{PetApiDelegate, StoreApiDelegate, UserApiDelegate};
use crate::errors::ApiErrorResponse;

mod pet;
mod store;
mod user;

use self::pet::pet_router;
use self::store::store_router;
use self::user::user_router;

/// Base path of every Petstore route.
pub const BASE_PATH: &str = "/api/v3";

/// Component schemas of the Petstore API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Swagger Petstore - OpenAPI 3.0", version = "1.0.0"),
    servers((url = "/api/v3")),
    components(schemas(Pet, Category, Tag, PetStatus, Order, OrderStatus, User, ApiErrorResponse))
)]
pub struct PetstoreDoc;

/// The application router, every operation handled by the delegate.
pub fn app_router<D>(delegate: Arc<D>) -> Router
where
    D: PetApiDelegate + StoreApiDelegate + UserApiDelegate,
{
    let api = Router::new()
        .merge(pet_router(Arc::clone(&delegate)))
        .merge(store_router(Arc::clone(&delegate)))
        .merge(user_router(delegate))
        .route("/openapi.json", get(openapi));

    Router::new().nest(BASE_PATH, api)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(PetstoreDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_document_model_schemas() {
        let doc = PetstoreDoc::openapi();

        let schemas = doc
            .components
            .map(|components| components.schemas.into_keys().collect::<Vec<_>>())
            .unwrap_or_default();
        insta::assert_debug_snapshot!(schemas, @r#"
        [
            "ApiErrorResponse",
            "Category",
            "Order",
            "OrderStatus",
            "Pet",
            "PetStatus",
            "Tag",
            "User",
        ]
        "#);
    }
}
