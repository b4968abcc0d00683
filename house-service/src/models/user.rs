use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Renter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Renter => "renter",
        }
    }
}

/// A registered account. The password is stored exactly as supplied;
/// login is a verbatim string comparison against this field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub role: Role,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        full_name: String,
        role: Role,
        phone_number: String,
        email: String,
        password: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            role,
            phone_number,
            email,
            password,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        assert_eq!(serde_json::to_string(&Role::Renter).unwrap(), "\"renter\"");
    }

    #[test]
    fn user_id_lands_in_underscore_id() {
        let user = User::new(
            "Jane Doe".into(),
            Role::Owner,
            "555-0100".into(),
            "jane@example.com".into(),
            "p1".into(),
        );
        let value = mongodb::bson::to_document(&user).unwrap();
        assert_eq!(value.get_str("_id").unwrap(), user.id);
        assert_eq!(value.get_str("role").unwrap(), "owner");
    }
}
