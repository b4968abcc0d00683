use serde::{Deserialize, Serialize};

use crate::models::House;

/// Caller-supplied listing fields, stored verbatim. Typed, but deliberately
/// without range checks on the numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseFields {
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
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseResponse {
    pub id: String,
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
}

impl From<House> for HouseResponse {
    fn from(house: House) -> Self {
        Self {
            id: house.id,
            owner: house.owner,
            name: house.name,
            address: house.address,
            city: house.city,
            bedrooms: house.bedrooms,
            bathrooms: house.bathrooms,
            room_size: house.room_size,
            picture: house.picture,
            availability_date: house.availability_date,
            rent: house.rent,
            phone_number: house.phone_number,
            description: house.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HouseListResponse {
    pub houses: Vec<HouseResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCreatedResponse {
    pub id: String,
    pub message: String,
}
