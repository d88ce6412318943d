use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, post};
use serde::Deserialize;

use petstore_client::model::User;

use crate::delegate::UserApiDelegate;
use crate::errors::ApiError;
use crate::extractors::{ApiPath, ApiQuery, OptionalBody, ResponseFormat};

pub(crate) fn user_router<D>(delegate: Arc<D>) -> Router
where
    D: UserApiDelegate,
{
    Router::new()
        .route("/user", post(create_user::<D>))
        .route(
            "/user/createWithList",
            post(create_users_with_list_input::<D>),
        )
        .route("/user/login", get(login_user::<D>))
        .route("/user/logout", get(logout_user::<D>))
        .route(
            "/user/{username}",
            get(get_user_by_name::<D>)
                .put(update_user::<D>)
                .delete(delete_user::<D>),
        )
        .with_state(delegate)
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    username: Option<String>,
    password: Option<String>,
}

async fn create_user<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    OptionalBody(user): OptionalBody<User>,
) -> Result<Response, ApiError>
where
    D: UserApiDelegate,
{
    let user = delegate.create_user(user).await?;
    Ok(format.ok(&user))
}

async fn create_users_with_list_input<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    OptionalBody(users): OptionalBody<Vec<User>>,
) -> Result<Response, ApiError>
where
    D: UserApiDelegate,
{
    let user = delegate.create_users_with_list_input(users).await?;
    Ok(format.ok(&user))
}

async fn login_user<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    ApiQuery(query): ApiQuery<LoginQuery>,
) -> Result<Response, ApiError>
where
    D: UserApiDelegate,
{
    let session = delegate.login_user(query.username, query.password).await?;
    Ok(format.ok(&session))
}

async fn logout_user<D>(State(delegate): State<Arc<D>>) -> Result<StatusCode, ApiError>
where
    D: UserApiDelegate,
{
    delegate.logout_user().await?;
    Ok(StatusCode::OK)
}

async fn get_user_by_name<D>(
    State(delegate): State<Arc<D>>,
    format: ResponseFormat,
    ApiPath(username): ApiPath<String>,
) -> Result<Response, ApiError>
where
    D: UserApiDelegate,
{
    let user = delegate.get_user_by_name(username).await?;
    Ok(format.ok(&user))
}

async fn update_user<D>(
    State(delegate): State<Arc<D>>,
    ApiPath(username): ApiPath<String>,
    OptionalBody(user): OptionalBody<User>,
) -> Result<StatusCode, ApiError>
where
    D: UserApiDelegate,
{
    delegate.update_user(username, user).await?;
    Ok(StatusCode::OK)
}

async fn delete_user<D>(
    State(delegate): State<Arc<D>>,
    ApiPath(username): ApiPath<String>,
) -> Result<StatusCode, ApiError>
where
    D: UserApiDelegate,
{
    delegate.delete_user(username).await?;
    Ok(StatusCode::OK)
}
