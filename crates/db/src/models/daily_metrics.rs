use chrono::NaiveDate;
use innsight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Precomputed per-hotel, per-day rollup written by an external aggregation
/// job. The query layer treats this as a read-only materialized view with no
/// freshness guarantee beyond `calculated_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyMetrics {
    pub id: DbId,
    pub hotel_id: DbId,
    pub date: NaiveDate,
    pub occupancy_rate: Option<f64>,
    pub rooms_occupied: Option<i64>,
    pub rooms_available: Option<i64>,
    pub total_revenue: Option<f64>,
    pub average_daily_rate: Option<f64>,
    pub revenue_per_available_room: Option<f64>,
    pub booking_count: i64,
    pub cancellation_count: i64,
    pub calculated_at: Timestamp,
}

/// DTO for inserting a rollup row (used by the external job and by tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDailyMetrics {
    pub hotel_id: DbId,
    pub date: NaiveDate,
    pub occupancy_rate: Option<f64>,
    pub rooms_occupied: Option<i64>,
    pub rooms_available: Option<i64>,
    pub total_revenue: Option<f64>,
    pub average_daily_rate: Option<f64>,
    pub revenue_per_available_room: Option<f64>,
    pub booking_count: i64,
    pub cancellation_count: i64,
}
