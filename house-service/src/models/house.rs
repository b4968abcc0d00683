use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dtos::houses::HouseFields;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    #[serde(rename = "_id")]
    pub id: String,
    /// User id of the account that created the listing. Every read and
    /// write is filtered on this field.
    pub owner: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub room_size: String,
    pub picture: String,
    pub availability_date: String,
    pub rent: f64,
    pub phone_number: String,
    pub description: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl House {
    pub fn new(owner: String, fields: HouseFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner,
            name: fields.name,
            address: fields.address,
            city: fields.city,
            bedrooms: fields.bedrooms,
            bathrooms: fields.bathrooms,
            room_size: fields.room_size,
            picture: fields.picture,
            availability_date: fields.availability_date,
            rent: fields.rent,
            phone_number: fields.phone_number,
            description: fields.description,
            created_at: now,
            updated_at: now,
        }
    }
}
