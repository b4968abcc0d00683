use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

use crate::{
    dtos::{
        houses::{HouseCreatedResponse, HouseFields, HouseListResponse, HouseResponse},
        MessageResponse,
    },
    middleware::AuthUser,
    startup::AppState,
};

/// All listings owned by the authenticated caller.
pub async fn owner_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let houses = state.house_service.list_owned(&user.0.sub).await?;

    Ok(Json(HouseListResponse {
        houses: houses.into_iter().map(HouseResponse::from).collect(),
    }))
}

/// Create a listing. The owner is always the authenticated user, whatever
/// the body says.
pub async fn add_house(
    State(state): State<AppState>,
    user: AuthUser,
    Json(fields): Json<HouseFields>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.house_service.create(&user.0.sub, fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(HouseCreatedResponse {
            id,
            message: "House added successfully".to_string(),
        }),
    ))
}

/// Replace the mutable fields of a listing. Succeeds even when no listing
/// matches the id/owner pair.
pub async fn edit_house(
    State(state): State<AppState>,
    user: AuthUser,
    Path(house_id): Path<String>,
    Json(fields): Json<HouseFields>,
) -> Result<impl IntoResponse, AppError> {
    state
        .house_service
        .update(&user.0.sub, &house_id, fields)
        .await?;

    Ok(Json(MessageResponse {
        message: "House updated successfully".to_string(),
    }))
}

/// Delete a listing. Succeeds even when no listing matches the id/owner
/// pair.
pub async fn delete_house(
    State(state): State<AppState>,
    user: AuthUser,
    Path(house_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.house_service.delete(&user.0.sub, &house_id).await?;

    Ok(Json(MessageResponse {
        message: "House deleted successfully".to_string(),
    }))
}
