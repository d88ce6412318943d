use std::time::Duration;

use url::Url;

use super::auth::Authentication;
use super::operation::OperationDescriptor;
use super::{CallBody, CallCookies, CallForm, CallHeaders, CallPath, CallQuery};

mod builder;
mod execution;
#[cfg(test)]
mod tests;

/// A single invocation of a Petstore operation.
///
/// An `ApiCall` is created from an [`OperationDescriptor`] by
/// [`ApiClient::call`](super::ApiClient::call), filled with parameter values,
/// then turned into an HTTP request.
///
/// # Method Groups
///
/// ## Parameters
/// - [`with_path_param(name, value)`](Self::with_path_param)
/// - [`with_query_param(name, value)`](Self::with_query_param)
/// - [`with_header(name, value)`](Self::with_header)
/// - [`with_cookie(name, value)`](Self::with_cookie)
/// - [`with_form_field(name, value)`](Self::with_form_field)
/// - [`with_body(body)`](Self::with_body) / [`with_optional_body(body)`](Self::with_optional_body)
///
/// Passing `None` for a value is the same as not passing it; a missing
/// required parameter fails with [`ApiClientError::MissingParameter`](super::ApiClientError::MissingParameter)
/// before anything is sent.
///
/// ## Execution
/// - [`into_request()`](Self::into_request) - Builds the `reqwest::Request` without I/O
/// - `.await` or [`exchange()`](Self::exchange) - Sends the request, returns a [`CallResult`](super::CallResult)
/// - [`stream::<T>()`](Self::stream) - Sends the request, yields collection elements as they arrive
///
/// # Example
///
/// ```rust,no_run
/// use petstore_client::api::pet::GET_PET_BY_ID;
/// use petstore_client::model::Pet;
/// use petstore_client::ApiClient;
///
/// # async fn example() -> Result<(), petstore_client::ApiClientError> {
/// let client = ApiClient::builder().build()?;
/// let pet: Pet = client
///     .call(&GET_PET_BY_ID)
///     .with_path_param("petId", 1)
///     .await?
///     .body()?;
/// # Ok(())
/// # }
/// ```
#[derive(derive_more::Debug)]
pub struct ApiCall {
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Url,
    pub(super) operation: &'static OperationDescriptor,
    pub(super) authentications: Vec<Authentication>,
    pub(super) timeout: Option<Duration>,

    pub(super) path: CallPath,
    pub(super) query: CallQuery,
    pub(super) headers: CallHeaders,
    pub(super) cookies: CallCookies,
    pub(super) form: CallForm,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,
}
