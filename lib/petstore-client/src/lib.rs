//! # Petstore Client
//!
//! Typed HTTP client for the Petstore REST API (`/api/v3`).
//!
//! Every operation is described once by a `static`
//! [`OperationDescriptor`]: method, path template, media types, parameter
//! placements and security schemes. An [`ApiCall`] fills the descriptor with
//! values and turns it into a `reqwest` request.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use petstore_client::api::PetApi;
//! use petstore_client::ApiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), petstore_client::ApiClientError> {
//! let client = ApiClient::builder()
//!     .with_host("petstore.example.com")
//!     .with_api_key("special-key")
//!     .build()?;
//!
//! let pets = PetApi::new(client);
//! let pet = pets.get_pet_by_id(1).await?;
//! println!("{}", pet.name);
//! # Ok(())
//! # }
//! ```
//!
//! ## Invocation Flavors
//!
//! Each typed operation comes in several flavors:
//!
//! - `get_pet_by_id_request(1)` prepares the [`ApiCall`] without sending it
//! - `get_pet_by_id(1)` returns the decoded [`Pet`](model::Pet)
//! - `get_pet_by_id_with_http_info(1)` returns a [`ResponseEntity`] with the status and headers
//! - `find_pets_by_status_stream(..)` yields pets while the array is received
//!
//! ## Low-level Calls
//!
//! ```rust,no_run
//! use petstore_client::api::pet::FIND_PETS_BY_TAGS;
//! use petstore_client::model::Pet;
//! use petstore_client::ApiClient;
//!
//! # async fn example(client: ApiClient) -> Result<(), petstore_client::ApiClientError> {
//! let pets: Vec<Pet> = client
//!     .call(&FIND_PETS_BY_TAGS)
//!     .with_query_param("tags", ["tag1", "tag2"]) // tags=tag1&tags=tag2
//!     .await?
//!     .body()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! All operations return [`ApiClientError`]. The two cases callers usually
//! match on:
//!
//! - [`ApiClientError::HttpStatusFailure`] for a non-2xx response, with the status, headers and raw body
//! - [`ApiClientError::MissingParameter`] for a required parameter left unset, raised before any I/O
//!
//! ## Configuration
//!
//! [`ApiClientBuilder::from_env`] reads `PETSTORE_BASE_URL`, `PETSTORE_API_KEY`
//! and `PETSTORE_ACCESS_TOKEN`.

mod client;

pub mod api;
pub mod model;

pub use self::client::{
    ACCESS_TOKEN_VAR, API_KEY_HEADER, API_KEY_VAR, ApiCall, ApiClient, ApiClientBuilder,
    ApiClientError, Authentication, AuthenticationError, BASE_URL_VAR, CallBody, CallCookies,
    CallForm, CallHeaders, CallPath, CallQuery, CallResult, CollectionFormat, DEFAULT_BASE_PATH,
    ItemStream, MediaType, OperationDescriptor, Output, ParamLocation, ParameterSpec,
    ParameterValue, RequestBody, ResponseEntity, SecureString, SecurityScheme,
};
