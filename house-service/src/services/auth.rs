use futures::stream::TryStreamExt;

use crate::{
    dtos::auth::{LoginRequest, RegisterRequest},
    models::User,
    services::{JwtService, MongoDb, ServiceError},
};

#[derive(Clone)]
pub struct AuthService {
    db: MongoDb,
    jwt: JwtService,
}

impl AuthService {
    pub fn new(db: MongoDb, jwt: JwtService) -> Self {
        Self { db, jwt }
    }

    /// Register a new account. Uniqueness is a pre-insert existence check;
    /// two concurrent registrations for the same email can both pass it.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, ServiceError> {
        if self.db.find_user_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::UserAlreadyExists);
        }

        let user = User::new(
            req.full_name,
            req.role,
            req.phone_number,
            req.email,
            req.password,
        );

        self.db.users().insert_one(&user, None).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Check credentials and issue a signed token embedding id, email and
    /// role. The stored password is compared verbatim.
    pub async fn login(&self, req: LoginRequest) -> Result<String, ServiceError> {
        let user = self
            .db
            .find_user_by_email(&req.email)
            .await?
            .filter(|user| user.password == req.password)
            .ok_or(ServiceError::InvalidCredentials)?;

        let token = self
            .jwt
            .generate_token(&user.id, &user.email, user.role.as_str())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(token)
    }

    /// Diagnostic dump of every registered user, stored records as-is.
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let mut cursor = self.db.users().find(None, None).await?;

        let mut users = Vec::new();
        while let Some(user) = cursor.try_next().await? {
            users.push(user);
        }

        Ok(users)
    }
}
