use innsight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A room belonging to exactly one hotel. Room numbers are unique per hotel
/// (enforced by `uq_rooms_hotel_room_number`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub hotel_id: DbId,
    pub room_number: String,
    pub room_type: String,
    pub base_price: f64,
    pub max_occupancy: i64,
    pub is_available: bool,
}

/// DTO for inserting a new room.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoom {
    pub hotel_id: DbId,
    pub room_number: String,
    pub room_type: String,
    pub base_price: f64,
    pub max_occupancy: i64,
    pub is_available: bool,
}
