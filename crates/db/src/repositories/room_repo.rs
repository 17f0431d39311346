//! Repository for the `rooms` table.

use innsight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::room::{CreateRoom, Room};

/// Column list for `rooms` queries.
const COLUMNS: &str = "id, hotel_id, room_number, room_type, base_price, max_occupancy, is_available";

/// Provides read and insert operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room. Fails with a unique-constraint violation if the
    /// hotel already has a room with this number.
    pub async fn insert(pool: &SqlitePool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (hotel_id, room_number, room_type, base_price, max_occupancy, is_available) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(input.hotel_id)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(input.base_price)
            .bind(input.max_occupancy)
            .bind(input.is_available)
            .fetch_one(pool)
            .await
    }

    /// List a hotel's rooms ordered by room number.
    pub async fn list_by_hotel(
        pool: &SqlitePool,
        hotel_id: DbId,
    ) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rooms WHERE hotel_id = $1 ORDER BY room_number"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(hotel_id)
            .fetch_all(pool)
            .await
    }

    /// Count a hotel's rooms. Used by the seeder's idempotency check.
    pub async fn count_by_hotel(pool: &SqlitePool, hotel_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(id) FROM rooms WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
