use std::time::Duration;

use url::Url;

mod builder;
pub use self::builder::{
    ACCESS_TOKEN_VAR, API_KEY_VAR, ApiClientBuilder, BASE_URL_VAR, DEFAULT_BASE_PATH,
};

mod call;
pub use self::call::ApiCall;

mod parameters;
pub use self::parameters::{
    CallBody, CallCookies, CallForm, CallHeaders, CallPath, CallQuery, ParameterValue, RequestBody,
};

mod response;
pub use self::response::{CallResult, ItemStream, Output, ResponseEntity};

mod auth;
pub use self::auth::{API_KEY_HEADER, Authentication, AuthenticationError, SecureString};

mod media;
pub use self::media::MediaType;

mod operation;
pub use self::operation::{
    CollectionFormat, OperationDescriptor, ParamLocation, ParameterSpec, SecurityScheme,
};

mod error;
pub use self::error::ApiClientError;

/// HTTP client for the Petstore API.
///
/// `ApiClient` is cheap to clone: clones share the same `reqwest::Client`
/// connection pool. Each call is independent, there is no shared mutable state.
///
/// Use [`ApiClientBuilder`] to create instances, then either the typed
/// operation groups of [`api`](crate::api) or [`call`](Self::call) with an
/// [`OperationDescriptor`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_uri: Url,
    authentications: Vec<Authentication>,
    timeout: Option<Duration>,
}

// Create
impl ApiClient {
    /// Creates a builder with the default configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The base URL prepended to every operation path.
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }
}

// Calls
impl ApiClient {
    /// Starts a call of the given operation.
    pub fn call(&self, operation: &'static OperationDescriptor) -> ApiCall {
        ApiCall {
            client: self.client.clone(),
            base_uri: self.base_uri.clone(),
            operation,
            authentications: self.authentications.clone(),
            timeout: self.timeout,
            path: CallPath::new(operation.path),
            query: CallQuery::new(),
            headers: CallHeaders::new(),
            cookies: CallCookies::new(),
            form: CallForm::new(),
            body: None,
        }
    }
}
