use chrono::Utc;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;

use crate::{
    dtos::houses::HouseFields,
    models::House,
    services::{MongoDb, ServiceError},
};

#[derive(Clone)]
pub struct HouseService {
    db: MongoDb,
}

impl HouseService {
    pub fn new(db: MongoDb) -> Self {
        Self { db }
    }

    /// All listings owned by the given user, newest first.
    pub async fn list_owned(&self, user_id: &str) -> Result<Vec<House>, ServiceError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self
            .db
            .houses()
            .find(doc! { "owner": user_id }, find_options)
            .await?;

        let mut houses = Vec::new();
        while let Some(house) = cursor.try_next().await? {
            houses.push(house);
        }

        Ok(houses)
    }

    /// Insert a new listing with the owner forced to the authenticated user.
    pub async fn create(&self, user_id: &str, fields: HouseFields) -> Result<String, ServiceError> {
        let house = House::new(user_id.to_string(), fields);

        self.db.houses().insert_one(&house, None).await?;

        tracing::info!(house_id = %house.id, owner = %user_id, "House listing created");

        Ok(house.id)
    }

    /// Replace the mutable fields of a listing. The filter requires both id
    /// and owner to match; zero matches is still reported as success
    /// (pass-through update semantics).
    pub async fn update(
        &self,
        user_id: &str,
        house_id: &str,
        fields: HouseFields,
    ) -> Result<(), ServiceError> {
        let update = doc! {
            "$set": {
                "name": &fields.name,
                "address": &fields.address,
                "city": &fields.city,
                "bedrooms": fields.bedrooms,
                "bathrooms": fields.bathrooms,
                "room_size": &fields.room_size,
                "picture": &fields.picture,
                "availability_date": &fields.availability_date,
                "rent": fields.rent,
                "phone_number": &fields.phone_number,
                "description": &fields.description,
                "updated_at": mongodb::bson::DateTime::from_chrono(Utc::now()),
            }
        };

        let result = self
            .db
            .houses()
            .update_one(doc! { "_id": house_id, "owner": user_id }, update, None)
            .await?;

        if result.matched_count == 0 {
            tracing::debug!(house_id = %house_id, owner = %user_id, "Update matched no listing");
        }

        Ok(())
    }

    /// Delete a listing if both id and owner match; likewise not
    /// existence-checked.
    pub async fn delete(&self, user_id: &str, house_id: &str) -> Result<(), ServiceError> {
        let result = self
            .db
            .houses()
            .delete_one(doc! { "_id": house_id, "owner": user_id }, None)
            .await?;

        if result.deleted_count == 0 {
            tracing::debug!(house_id = %house_id, owner = %user_id, "Delete matched no listing");
        }

        Ok(())
    }
}
