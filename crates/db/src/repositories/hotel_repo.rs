//! Repository for the `hotels` table.

use innsight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::hotel::{CreateHotel, Hotel};

/// Column list for `hotels` queries.
const COLUMNS: &str = "id, name, location, total_rooms, star_rating, created_at";

/// Provides read and insert operations for hotels.
pub struct HotelRepo;

impl HotelRepo {
    /// Insert a new hotel.
    pub async fn insert(pool: &SqlitePool, input: &CreateHotel) -> Result<Hotel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hotels (name, location, total_rooms, star_rating) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hotel>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(input.total_rooms)
            .bind(input.star_rating)
            .fetch_one(pool)
            .await
    }

    /// Find a hotel by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE id = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a hotel by its unique name. Used by the seeder's idempotency check.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels WHERE name = $1");
        sqlx::query_as::<_, Hotel>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all hotels, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Hotel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hotels ORDER BY id");
        sqlx::query_as::<_, Hotel>(&query).fetch_all(pool).await
    }
}
