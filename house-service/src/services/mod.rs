pub mod auth;
pub mod database;
pub mod error;
pub mod houses;
pub mod jwt;

pub use auth::AuthService;
pub use database::MongoDb;
pub use error::ServiceError;
pub use houses::HouseService;
pub use jwt::{Claims, JwtService};
