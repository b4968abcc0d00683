pub mod auth;
pub mod health;
pub mod houses;

pub use auth::{list_users, login, protected, register};
pub use health::{greeting, health_check};
pub use houses::{add_house, delete_house, edit_house, owner_dashboard};
