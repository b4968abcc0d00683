pub mod house;
pub mod user;

pub use house::House;
pub use user::{Role, User};
