use chrono::NaiveDate;
use innsight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation. `booking_price` is a point-in-time fact computed at
/// creation from the room's base price, the day-of-week and seasonal
/// multipliers, and the stay duration; it is never recomputed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub hotel_id: DbId,
    /// Nullable: a booking may reference a room that no longer resolves.
    pub room_id: Option<DbId>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub num_guests: i64,
    pub booking_price: f64,
    pub base_price: f64,
    pub booking_date: Timestamp,
    pub booking_source: Option<String>,
    pub status: String,
}

/// DTO for inserting a new booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub hotel_id: DbId,
    pub room_id: Option<DbId>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub num_guests: i64,
    pub booking_price: f64,
    pub base_price: f64,
    pub booking_date: Timestamp,
    pub booking_source: Option<String>,
    pub status: String,
}
