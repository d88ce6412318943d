use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::client::{MediaType, RequestBody};

/// A store user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 10)]
    pub id: Option<i64>,
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "theUser")]
    pub username: Option<String>,
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// User status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<i32>,
}

impl User {
    /// A user with only a login name.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            ..Self::default()
        }
    }
}

impl RequestBody for User {
    const MEDIA_TYPES: &'static [MediaType] = &[
        MediaType::Json,
        MediaType::Xml,
        MediaType::FormUrlEncoded,
    ];
}
