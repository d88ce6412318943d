//! Capability traits implemented by the object that handles Petstore operations.
//!
//! The routers own the HTTP concerns (routing, negotiation, status codes);
//! a delegate only sees typed values.

use std::future::Future;

use petstore_client::model::{Inventory, Order, Pet, PetStatus, User};

use crate::errors::ApiError;

/// Everything about pets.
pub trait PetApiDelegate: Send + Sync + 'static {
    /// `POST /pet`
    fn add_pet(&self, pet: Pet) -> impl Future<Output = Result<Pet, ApiError>> + Send;

    /// `PUT /pet`
    fn update_pet(&self, pet: Pet) -> impl Future<Output = Result<Pet, ApiError>> + Send;

    /// `GET /pet/findByStatus`
    fn find_pets_by_status(
        &self,
        status: Option<PetStatus>,
    ) -> impl Future<Output = Result<Vec<Pet>, ApiError>> + Send;

    /// `GET /pet/findByTags`, tags in request order
    fn find_pets_by_tags(
        &self,
        tags: Vec<String>,
    ) -> impl Future<Output = Result<Vec<Pet>, ApiError>> + Send;

    /// `GET /pet/{petId}`
    fn get_pet_by_id(&self, pet_id: i64) -> impl Future<Output = Result<Pet, ApiError>> + Send;

    /// `POST /pet/{petId}`
    fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<String>,
        status: Option<String>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /pet/{petId}`
    fn delete_pet(
        &self,
        pet_id: i64,
        api_key: Option<String>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Access to Petstore orders.
pub trait StoreApiDelegate: Send + Sync + 'static {
    /// `GET /store/inventory`
    fn get_inventory(&self) -> impl Future<Output = Result<Inventory, ApiError>> + Send;

    /// `POST /store/order`
    fn place_order(
        &self,
        order: Option<Order>,
    ) -> impl Future<Output = Result<Order, ApiError>> + Send;

    /// `GET /store/order/{orderId}`
    fn get_order_by_id(
        &self,
        order_id: i64,
    ) -> impl Future<Output = Result<Order, ApiError>> + Send;

    /// `DELETE /store/order/{orderId}`
    fn delete_order(&self, order_id: String) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Operations about users.
pub trait UserApiDelegate: Send + Sync + 'static {
    /// `POST /user`
    fn create_user(
        &self,
        user: Option<User>,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;

    /// `POST /user/createWithList`
    fn create_users_with_list_input(
        &self,
        users: Option<Vec<User>>,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;

    /// `GET /user/login`, returns the session message
    fn login_user(
        &self,
        username: Option<String>,
        password: Option<String>,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// `GET /user/logout`
    fn logout_user(&self) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /user/{username}`
    fn get_user_by_name(
        &self,
        username: String,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;

    /// `PUT /user/{username}`
    fn update_user(
        &self,
        username: String,
        user: Option<User>,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `DELETE /user/{username}`
    fn delete_user(&self, username: String) -> impl Future<Output = Result<(), ApiError>> + Send;
}
