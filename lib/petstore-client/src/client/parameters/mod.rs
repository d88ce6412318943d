//! Request parameter types for building API calls.
//!
//! Each type holds the values of one placement:
//!
//! - [`CallPath`] - Path parameters (e.g., `/pet/{petId}`)
//! - [`CallQuery`] - Query string parameters
//! - [`CallHeaders`] - HTTP headers
//! - [`CallCookies`] - Cookie parameters
//! - [`CallForm`] - Form fields
//! - [`CallBody`] - Request body content
//!
//! Serialization rules (required flags, collection formats) come from the
//! [`OperationDescriptor`](super::OperationDescriptor) of the call.

mod param;
pub use self::param::ParameterValue;

mod path;
pub use self::path::CallPath;
pub(in crate::client) use self::path::PathResolved;

mod query;
pub use self::query::CallQuery;

mod headers;
pub use self::headers::CallHeaders;

mod cookies;
pub use self::cookies::CallCookies;

mod form;
pub use self::form::CallForm;

mod body;
pub use self::body::{CallBody, RequestBody};
