//! Read-side aggregation queries behind the smart-query endpoints.
//!
//! Every method is a pure read. Optional filters use `($N IS NULL OR ...)`
//! guards so one statement covers all filter combinations. Monetary
//! aggregates are CAST to REAL so empty groups decode as 0.0 rather than an
//! integer zero.

use chrono::NaiveDate;
use innsight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::report::{
    CancellationCounts, PopularRoomType, RevenueTotals, SourceBucket, StayRow, TopBooking,
    TopBookingsOrder,
};

/// Projection for the top-bookings view (subset of booking columns).
const TOP_BOOKING_COLUMNS: &str =
    "id, hotel_id, guest_name, check_in_date, check_out_date, booking_price, status";

/// Provides the pre-aggregated analytical queries.
pub struct ReportRepo;

impl ReportRepo {
    /// Sum revenue and count bookings over confirmed/completed bookings,
    /// optionally filtered by hotel and date window. Empty result sets sum
    /// to 0.0, never NULL.
    pub async fn revenue_totals(
        pool: &SqlitePool,
        hotel_id: Option<DbId>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<RevenueTotals, sqlx::Error> {
        sqlx::query_as::<_, RevenueTotals>(
            "SELECT CAST(COALESCE(SUM(booking_price), 0) AS REAL) AS total_revenue, \
                    COUNT(id) AS booking_count \
             FROM bookings \
             WHERE status IN ('confirmed', 'completed') \
               AND ($1 IS NULL OR hotel_id = $1) \
               AND ($2 IS NULL OR check_in_date >= $2) \
               AND ($3 IS NULL OR check_out_date <= $3)",
        )
        .bind(hotel_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(pool)
        .await
    }

    /// Group bookings by source with per-source count and revenue. Sources
    /// missing on the row (legacy imports) fall into an `unknown` bucket.
    pub async fn source_buckets(
        pool: &SqlitePool,
        hotel_id: Option<DbId>,
    ) -> Result<Vec<SourceBucket>, sqlx::Error> {
        sqlx::query_as::<_, SourceBucket>(
            "SELECT COALESCE(booking_source, 'unknown') AS booking_source, \
                    COUNT(id) AS bookings, \
                    CAST(COALESCE(SUM(booking_price), 0) AS REAL) AS revenue \
             FROM bookings \
             WHERE ($1 IS NULL OR hotel_id = $1) \
             GROUP BY COALESCE(booking_source, 'unknown')",
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
    }

    /// Every (check-in date, price) pair for a hotel, feeding the
    /// weekend/weekday partition.
    pub async fn stay_rows(
        pool: &SqlitePool,
        hotel_id: DbId,
    ) -> Result<Vec<StayRow>, sqlx::Error> {
        sqlx::query_as::<_, StayRow>(
            "SELECT check_in_date, booking_price FROM bookings WHERE hotel_id = $1",
        )
        .bind(hotel_id)
        .fetch_all(pool)
        .await
    }

    /// Total and cancelled booking counts plus the revenue lost to
    /// cancellations, optionally scoped to one hotel.
    pub async fn cancellation_counts(
        pool: &SqlitePool,
        hotel_id: Option<DbId>,
    ) -> Result<CancellationCounts, sqlx::Error> {
        sqlx::query_as::<_, CancellationCounts>(
            "SELECT COUNT(id) AS total_bookings, \
                    COUNT(CASE WHEN status = 'cancelled' THEN id END) AS cancelled_bookings, \
                    CAST(COALESCE(SUM(CASE WHEN status = 'cancelled' THEN booking_price END), 0) AS REAL) \
                        AS lost_revenue \
             FROM bookings \
             WHERE ($1 IS NULL OR hotel_id = $1)",
        )
        .bind(hotel_id)
        .fetch_one(pool)
        .await
    }

    /// Top bookings across all hotels (intentionally not hotel-scoped: this
    /// backs the platform-wide ranking view), sorted descending by price or
    /// by check-in date. `limit` must already be clamped by the caller.
    pub async fn top_bookings(
        pool: &SqlitePool,
        limit: i64,
        order_by: TopBookingsOrder,
    ) -> Result<Vec<TopBooking>, sqlx::Error> {
        let order_clause = match order_by {
            TopBookingsOrder::Price => "booking_price DESC",
            TopBookingsOrder::Date => "check_in_date DESC",
        };
        let query = format!(
            "SELECT {TOP_BOOKING_COLUMNS} FROM bookings ORDER BY {order_clause} LIMIT $1"
        );
        sqlx::query_as::<_, TopBooking>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// A hotel's room types ranked by booking volume, with the average
    /// realized price per type rounded to 2 decimals. `limit` must already
    /// be clamped by the caller.
    pub async fn popular_room_types(
        pool: &SqlitePool,
        hotel_id: DbId,
        limit: i64,
    ) -> Result<Vec<PopularRoomType>, sqlx::Error> {
        sqlx::query_as::<_, PopularRoomType>(
            "SELECT r.room_type AS room_type, \
                    COUNT(b.id) AS booking_count, \
                    ROUND(AVG(b.booking_price), 2) AS average_price \
             FROM rooms r \
             JOIN bookings b ON b.room_id = r.id \
             WHERE r.hotel_id = $1 \
             GROUP BY r.room_type \
             ORDER BY COUNT(b.id) DESC \
             LIMIT $2",
        )
        .bind(hotel_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
