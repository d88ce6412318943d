use http::Method;

use super::{body, entity};
use crate::client::{
    ApiCall, ApiClient, ApiClientError, MediaType, OperationDescriptor, ParameterSpec,
    ResponseEntity, SecurityScheme,
};
use crate::model::{Inventory, Order};

/// `GET /store/inventory`
pub static GET_INVENTORY: OperationDescriptor = OperationDescriptor {
    operation_id: "getInventory",
    method: Method::GET,
    path: "/store/inventory",
    produces: &[MediaType::Json],
    consumes: &[],
    parameters: &[],
    security: &[SecurityScheme::ApiKey],
};

/// `POST /store/order`
pub static PLACE_ORDER: OperationDescriptor = OperationDescriptor {
    operation_id: "placeOrder",
    method: Method::POST,
    path: "/store/order",
    produces: &[MediaType::Json],
    consumes: &[MediaType::Json, MediaType::Xml, MediaType::FormUrlEncoded],
    parameters: &[ParameterSpec::body("order")],
    security: &[],
};

/// `GET /store/order/{orderId}`
pub static GET_ORDER_BY_ID: OperationDescriptor = OperationDescriptor {
    operation_id: "getOrderById",
    method: Method::GET,
    path: "/store/order/{orderId}",
    produces: &[MediaType::Xml, MediaType::Json],
    consumes: &[],
    parameters: &[ParameterSpec::path("orderId")],
    security: &[],
};

/// `DELETE /store/order/{orderId}`
pub static DELETE_ORDER: OperationDescriptor = OperationDescriptor {
    operation_id: "deleteOrder",
    method: Method::DELETE,
    path: "/store/order/{orderId}",
    produces: &[],
    consumes: &[],
    parameters: &[ParameterSpec::path("orderId")],
    security: &[],
};

/// Access to Petstore orders.
#[derive(Debug, Clone)]
pub struct StoreApi {
    client: ApiClient,
}

impl StoreApi {
    /// Creates the group on top of a client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Prepares `getInventory`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn get_inventory_request(&self) -> Result<ApiCall, ApiClientError> {
        Ok(self.client.call(&GET_INVENTORY))
    }

    /// Returns pet inventories by status.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_inventory(&self) -> Result<Inventory, ApiClientError> {
        body(self.get_inventory_request()?).await
    }

    /// Returns pet inventories by status, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_inventory_with_http_info(
        &self,
    ) -> Result<ResponseEntity<Inventory>, ApiClientError> {
        entity(self.get_inventory_request()?).await
    }

    /// Prepares `placeOrder`.
    ///
    /// # Errors
    ///
    /// Fails if the order cannot be encoded.
    pub fn place_order_request(&self, order: Option<&Order>) -> Result<ApiCall, ApiClientError> {
        self.client.call(&PLACE_ORDER).with_optional_body(order)
    }

    /// Places an order for a pet.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn place_order(&self, order: Option<&Order>) -> Result<Order, ApiClientError> {
        body(self.place_order_request(order)?).await
    }

    /// Places an order for a pet, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn place_order_with_http_info(
        &self,
        order: Option<&Order>,
    ) -> Result<ResponseEntity<Order>, ApiClientError> {
        entity(self.place_order_request(order)?).await
    }

    /// Prepares `getOrderById`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn get_order_by_id_request(&self, order_id: i64) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&GET_ORDER_BY_ID)
            .with_path_param("orderId", order_id))
    }

    /// Finds a purchase order by id.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_order_by_id(&self, order_id: i64) -> Result<Order, ApiClientError> {
        body(self.get_order_by_id_request(order_id)?).await
    }

    /// Finds a purchase order by id, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn get_order_by_id_with_http_info(
        &self,
        order_id: i64,
    ) -> Result<ResponseEntity<Order>, ApiClientError> {
        entity(self.get_order_by_id_request(order_id)?).await
    }

    /// Prepares `deleteOrder`.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn delete_order_request(&self, order_id: &str) -> Result<ApiCall, ApiClientError> {
        Ok(self
            .client
            .call(&DELETE_ORDER)
            .with_path_param("orderId", order_id))
    }

    /// Deletes a purchase order.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_order(&self, order_id: &str) -> Result<(), ApiClientError> {
        body(self.delete_order_request(order_id)?).await
    }

    /// Deletes a purchase order, keeping status and headers.
    ///
    /// # Errors
    ///
    /// See [`ApiClientError`].
    pub async fn delete_order_with_http_info(
        &self,
        order_id: &str,
    ) -> Result<ResponseEntity<()>, ApiClientError> {
        entity(self.delete_order_request(order_id)?).await
    }
}
