use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::client::{MediaType, RequestBody};

/// Pet quantities by status.
pub type Inventory = BTreeMap<String, i32>;

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 10)]
    pub id: Option<i64>,
    /// The ordered pet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 198_772)]
    pub pet_id: Option<i64>,
    /// Number of pets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 7)]
    pub quantity: Option<i32>,
    /// Shipping date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_date: Option<DateTime<Utc>>,
    /// Order status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Whether the order is complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
}

impl RequestBody for Order {
    const MEDIA_TYPES: &'static [MediaType] = &[
        MediaType::Json,
        MediaType::Xml,
        MediaType::FormUrlEncoded,
    ];
}

/// Order status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed.
    #[display("placed")]
    Placed,
    /// Order approved.
    #[display("approved")]
    Approved,
    /// Order delivered.
    #[display("delivered")]
    Delivered,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_encode_order_as_form() {
        let order = Order {
            id: Some(10),
            pet_id: Some(198_772),
            quantity: Some(7),
            ship_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single(),
            status: Some(OrderStatus::Approved),
            complete: Some(true),
        };

        let data = MediaType::FormUrlEncoded.encode(&order).expect("encoded");

        insta::assert_snapshot!(
            String::from_utf8_lossy(&data),
            @"id=10&petId=198772&quantity=7&shipDate=2024-05-01T12%3A00%3A00Z&status=approved&complete=true"
        );
    }

    #[test]
    fn should_decode_example_order() {
        let order: Order =
            serde_json::from_str(r#"{"id":1,"quantity":5,"complete":false}"#).expect("decoded");

        assert_eq!(
            order,
            Order {
                id: Some(1),
                quantity: Some(5),
                complete: Some(false),
                ..Order::default()
            }
        );
    }

    #[test]
    fn should_decode_inventory() {
        let inventory: Inventory =
            serde_json::from_str(r#"{"sold":1,"available":7}"#).expect("decoded");

        assert_eq!(inventory.get("available"), Some(&7));
    }
}
