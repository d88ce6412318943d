//! Axum server for the Petstore API.
//!
//! Every operation is handed to a delegate implementing
//! [`PetApiDelegate`], [`StoreApiDelegate`] and [`UserApiDelegate`];
//! the routers take care of routing and content negotiation.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing::info;

mod delegate;
mod errors;
mod example;
mod extractors;
mod routes;

pub use self::delegate::{PetApiDelegate, StoreApiDelegate, UserApiDelegate};
pub use self::errors::{ApiError, ApiErrorResponse};
pub use self::example::ExampleDelegate;
pub use self::extractors::{AnyFormat, OptionalBody, ResponseFormat};
pub use self::routes::{BASE_PATH, PetstoreDoc, app_router};

/// Launch the server with the example delegate
///
/// # Errors
///
/// fail if the socket cannot be created (e.g. port already used)
/// fail if the server cannot be launch
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("opening {addr}"))?;
    info!("Using address {addr}");

    launch(listener, ExampleDelegate).await
}

/// Launch the server on an open listener
///
/// # Errors
///
/// fail if the server cannot be launch
pub async fn launch<D>(listener: tokio::net::TcpListener, delegate: D) -> anyhow::Result<()>
where
    D: PetApiDelegate + StoreApiDelegate + UserApiDelegate,
{
    let app = app_router(Arc::new(delegate)).layer(TraceLayer::new_for_http());

    axum::serve(listener, app.into_make_service())
        .await
        .context("starting server")?;

    Ok(())
}
