use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use petstore_client::model::Order;

use crate::delegate::StoreApiDelegate;
use crate::errors::ApiError;
use crate::extractors::{ApiPath, OptionalBody, ResponseFormat};

pub(crate) fn store_router<D>(delegate: Arc<D>) -> Router
where
    D: StoreApiDelegate,
{
    Router::new()
        .route("/store/inventory", get(get_inventory::<D>))
        .route("/store/order", post(place_order::<D>))
        .route(
            "/store/order/{orderId}",
            get(get_order_by_id::<D>).delete(delete_order::<D>),
        )
        .with_state(delegate)
}

async fn get_inventory<D>(State(delegate): State<Arc<D>>) -> Result<Response, ApiError>
where
    D: StoreApiDelegate,
{
    let inventory = delegate.get_inventory().await?;
    Ok(Json(inventory).into_response())
}

async fn place_order<D>(
    State(delegate): State<Arc<D>>,
    OptionalBody(order): OptionalBody<Order>,
) -> Result<Response, ApiError>
where
    D: StoreApiDelegate,
{
    let order = delegate.place_order(order).await?;
    Ok(Json(order).into_response())
}

async fn get_order_by_id<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    ApiPath(order_id): ApiPath<i64>,
) -> Result<Response, ApiError>
where
    D: StoreApiDelegate,
{
    let order = delegate.get_order_by_id(order_id).await?;
    Ok(format.ok(&order))
}

async fn delete_order<D>(
    State(delegate): State<Arc<D>>,
    ApiPath(order_id): ApiPath<String>,
) -> Result<StatusCode, ApiError>
where
    D: StoreApiDelegate,
{
    delegate.delete_order(order_id).await?;
    Ok(StatusCode::OK)
}
