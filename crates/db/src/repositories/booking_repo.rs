//! Repository for the `bookings` table.

use innsight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::booking::{Booking, CreateBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "\
    id, hotel_id, room_id, check_in_date, check_out_date, \
    guest_name, guest_email, num_guests, booking_price, base_price, \
    booking_date, booking_source, status";

/// Provides read and insert operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking. The schema rejects check-out on or before
    /// check-in and guest counts below one.
    pub async fn insert(
        pool: &SqlitePool,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings \
             (hotel_id, room_id, check_in_date, check_out_date, guest_name, guest_email, \
              num_guests, booking_price, base_price, booking_date, booking_source, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.hotel_id)
            .bind(input.room_id)
            .bind(input.check_in_date)
            .bind(input.check_out_date)
            .bind(&input.guest_name)
            .bind(&input.guest_email)
            .bind(input.num_guests)
            .bind(input.booking_price)
            .bind(input.base_price)
            .bind(input.booking_date)
            .bind(&input.booking_source)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a booking by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all bookings. Used by the seeder's idempotency check.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(id) FROM bookings")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
