use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::client::{MediaType, RequestBody};

/// A pet for sale in the pet store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    /// Pet identifier, assigned by the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 10)]
    pub id: Option<i64>,
    /// Pet name.
    #[schema(example = "doggie")]
    pub name: String,
    /// Pet category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Photo URLs, always sent.
    #[serde(default)]
    pub photo_urls: Vec<String>,
    /// Tags attached to the pet.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Pet status in the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
}

impl Pet {
    /// A pet with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: None,
            photo_urls: Vec::new(),
            tags: Vec::new(),
            status: None,
        }
    }
}

impl RequestBody for Pet {
    const MEDIA_TYPES: &'static [MediaType] = &[MediaType::Json, MediaType::Xml];
}

/// Pet status in the store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    /// Available for sale.
    #[display("available")]
    Available,
    /// Sale in progress.
    #[display("pending")]
    Pending,
    /// Sold.
    #[display("sold")]
    Sold,
}

/// A pet category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Dogs")]
    pub name: Option<String>,
}

/// A pet tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Tag name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
