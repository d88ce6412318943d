//! Petstore data transfer objects.
//!
//! Field names follow the Petstore wire format (`camelCase`); absent optional
//! fields are omitted when encoding.

mod pet;
pub use self::pet::{Category, Pet, PetStatus, Tag};

mod store;
pub use self::store::{Inventory, Order, OrderStatus};

mod user;
pub use self::user::User;
