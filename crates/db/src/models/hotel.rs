use innsight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hotel property. Created once by the seeder or an admin operation and
/// treated as immutable afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Hotel {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub total_rooms: i64,
    pub star_rating: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new hotel.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHotel {
    pub name: String,
    pub location: String,
    pub total_rooms: i64,
    pub star_rating: Option<f64>,
}
