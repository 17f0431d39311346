//! Handlers for basic hotel listing.

use axum::extract::{Path, State};
use axum::Json;
use innsight_core::error::CoreError;
use innsight_core::types::DbId;
use innsight_db::models::hotel::Hotel;
use innsight_db::repositories::HotelRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/hotels
pub async fn list_hotels(State(state): State<AppState>) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = HotelRepo::list(&state.pool).await?;
    Ok(Json(hotels))
}

/// GET /api/v1/hotels/{id}
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Hotel>> {
    let hotel = HotelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "hotel", id })?;
    Ok(Json(hotel))
}
