//! Repository for the `daily_metrics` rollup table.
//!
//! Rows are produced by an external aggregation job; the query layer only
//! reads them. The insert exists for that job and for test fixtures.

use chrono::NaiveDate;
use innsight_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::daily_metrics::{CreateDailyMetrics, DailyMetrics};

/// Column list for `daily_metrics` queries.
const COLUMNS: &str = "\
    id, hotel_id, date, occupancy_rate, rooms_occupied, rooms_available, \
    total_revenue, average_daily_rate, revenue_per_available_room, \
    booking_count, cancellation_count, calculated_at";

/// Provides read and insert operations for daily metrics.
pub struct DailyMetricsRepo;

impl DailyMetricsRepo {
    /// Insert a rollup row. One row per hotel per day
    /// (`uq_daily_metrics_hotel_date`).
    pub async fn insert(
        pool: &SqlitePool,
        input: &CreateDailyMetrics,
    ) -> Result<DailyMetrics, sqlx::Error> {
        let query = format!(
            "INSERT INTO daily_metrics \
             (hotel_id, date, occupancy_rate, rooms_occupied, rooms_available, \
              total_revenue, average_daily_rate, revenue_per_available_room, \
              booking_count, cancellation_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyMetrics>(&query)
            .bind(input.hotel_id)
            .bind(input.date)
            .bind(input.occupancy_rate)
            .bind(input.rooms_occupied)
            .bind(input.rooms_available)
            .bind(input.total_revenue)
            .bind(input.average_daily_rate)
            .bind(input.revenue_per_available_room)
            .bind(input.booking_count)
            .bind(input.cancellation_count)
            .fetch_one(pool)
            .await
    }

    /// List a hotel's rollup rows within an optional date window, ordered by
    /// date ascending.
    pub async fn list_for_hotel(
        pool: &SqlitePool,
        hotel_id: DbId,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<DailyMetrics>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_metrics \
             WHERE hotel_id = $1 \
               AND ($2 IS NULL OR date >= $2) \
               AND ($3 IS NULL OR date <= $3) \
             ORDER BY date"
        );
        sqlx::query_as::<_, DailyMetrics>(&query)
            .bind(hotel_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await
    }
}
