//! Typed Petstore operation groups.
//!
//! Each operation has a `static` [`OperationDescriptor`](crate::OperationDescriptor)
//! and, on its group, up to four methods:
//!
//! - `<op>_request(..)`: the prepared [`ApiCall`], nothing sent
//! - `<op>(..)`: the decoded body
//! - `<op>_with_http_info(..)`: the decoded body with status and headers
//! - `<op>_stream(..)`: collection elements decoded as they arrive
//!
//! Required parameters are plain arguments, optional ones are `Option`s.

use serde::de::DeserializeOwned;

use crate::client::{ApiCall, ApiClientError, ResponseEntity};

pub mod pet;
pub use self::pet::PetApi;

pub mod store;
pub use self::store::StoreApi;

pub mod user;
pub use self::user::UserApi;

async fn body<T>(call: ApiCall) -> Result<T, ApiClientError>
where
    T: DeserializeOwned,
{
    call.await?.body()
}

async fn entity<T>(call: ApiCall) -> Result<ResponseEntity<T>, ApiClientError>
where
    T: DeserializeOwned,
{
    call.await?.into_entity()
}

async fn items<T>(call: ApiCall) -> Result<Vec<T>, ApiClientError>
where
    T: DeserializeOwned,
{
    call.await?.items()
}

async fn items_entity<T>(call: ApiCall) -> Result<ResponseEntity<Vec<T>>, ApiClientError>
where
    T: DeserializeOwned,
{
    call.await?.into_items_entity()
}
