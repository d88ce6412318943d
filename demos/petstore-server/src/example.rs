use petstore_client::model::{Inventory, Order, Pet, PetStatus, User};
use tracing::debug;

use crate::delegate::{PetApiDelegate, StoreApiDelegate, UserApiDelegate};
use crate::errors::ApiError;

/// Delegate answering with fixed example data.
///
/// Pet 1 and order 1 exist, other ids are not found, every other operation
/// is not implemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExampleDelegate;

impl ExampleDelegate {
    fn bear() -> Pet {
        Pet {
            id: Some(1),
            status: Some(PetStatus::Available),
            ..Pet::new("Bear")
        }
    }

    fn first_order() -> Order {
        Order {
            id: Some(1),
            quantity: Some(5),
            complete: Some(false),
            ..Order::default()
        }
    }
}

impl PetApiDelegate for ExampleDelegate {
    async fn add_pet(&self, _pet: Pet) -> Result<Pet, ApiError> {
        Err(ApiError::not_implemented("addPet"))
    }

    async fn update_pet(&self, _pet: Pet) -> Result<Pet, ApiError> {
        Err(ApiError::not_implemented("updatePet"))
    }

    async fn find_pets_by_status(&self, _status: Option<PetStatus>) -> Result<Vec<Pet>, ApiError> {
        Err(ApiError::not_implemented("findPetsByStatus"))
    }

    async fn find_pets_by_tags(&self, _tags: Vec<String>) -> Result<Vec<Pet>, ApiError> {
        Err(ApiError::not_implemented("findPetsByTags"))
    }

    async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError> {
        debug!(pet_id, "looking up pet");
        if pet_id == 1 {
            Ok(Self::bear())
        } else {
            Err(ApiError::not_found("Pet", pet_id))
        }
    }

    async fn update_pet_with_form(
        &self,
        _pet_id: i64,
        _name: Option<String>,
        _status: Option<String>,
    ) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("updatePetWithForm"))
    }

    async fn delete_pet(&self, _pet_id: i64, _api_key: Option<String>) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("deletePet"))
    }
}

impl StoreApiDelegate for ExampleDelegate {
    async fn get_inventory(&self) -> Result<Inventory, ApiError> {
        Err(ApiError::not_implemented("getInventory"))
    }

    async fn place_order(&self, _order: Option<Order>) -> Result<Order, ApiError> {
        Err(ApiError::not_implemented("placeOrder"))
    }

    async fn get_order_by_id(&self, order_id: i64) -> Result<Order, ApiError> {
        debug!(order_id, "looking up order");
        if order_id == 1 {
            Ok(Self::first_order())
        } else {
            Err(ApiError::not_found("Order", order_id))
        }
    }

    async fn delete_order(&self, _order_id: String) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("deleteOrder"))
    }
}

impl UserApiDelegate for ExampleDelegate {
    async fn create_user(&self, _user: Option<User>) -> Result<User, ApiError> {
        Err(ApiError::not_implemented("createUser"))
    }

    async fn create_users_with_list_input(
        &self,
        _users: Option<Vec<User>>,
    ) -> Result<User, ApiError> {
        Err(ApiError::not_implemented("createUsersWithListInput"))
    }

    async fn login_user(
        &self,
        _username: Option<String>,
        _password: Option<String>,
    ) -> Result<String, ApiError> {
        Err(ApiError::not_implemented("loginUser"))
    }

    async fn logout_user(&self) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("logoutUser"))
    }

    async fn get_user_by_name(&self, _username: String) -> Result<User, ApiError> {
        Err(ApiError::not_implemented("getUserByName"))
    }

    async fn update_user(&self, _username: String, _user: Option<User>) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("updateUser"))
    }

    async fn delete_user(&self, _username: String) -> Result<(), ApiError> {
        Err(ApiError::not_implemented("deleteUser"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_find_example_pet() {
        let pet = ExampleDelegate.get_pet_by_id(1).await.expect("pet 1");

        assert_eq!(pet.name, "Bear");
        assert_eq!(pet.status, Some(PetStatus::Available));
    }

    #[tokio::test]
    async fn should_not_find_other_orders() {
        let error = ExampleDelegate
            .get_order_by_id(2)
            .await
            .expect_err("order 2 does not exist");

        insta::assert_snapshot!(error, @"Order 2 not found");
    }
}
