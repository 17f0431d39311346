//! Aggregate row structs and response shapes for the smart queries.
//!
//! `FromRow` structs here mirror the columns the report queries project;
//! `Serialize` structs are the wire shapes the API returns. Their field
//! names are contractual.

use chrono::NaiveDate;
use innsight_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Revenue sum and booking count over revenue-bearing bookings.
#[derive(Debug, Clone, FromRow)]
pub struct RevenueTotals {
    pub total_revenue: f64,
    pub booking_count: i64,
}

/// The filters a revenue query was run with, echoed back in the response.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueFilters {
    pub hotel_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Full total-revenue response: totals plus the echoed filters.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub total_revenue: f64,
    pub booking_count: i64,
    pub filters: RevenueFilters,
}

/// Per-source booking count and revenue, as grouped in SQL.
#[derive(Debug, Clone, FromRow)]
pub struct SourceBucket {
    pub booking_source: String,
    pub bookings: i64,
    pub revenue: f64,
}

/// Check-in date and price pair for the weekend/weekday partition.
#[derive(Debug, Clone, FromRow)]
pub struct StayRow {
    pub check_in_date: NaiveDate,
    pub booking_price: f64,
}

/// Raw cancellation counts for one hotel or the whole platform.
#[derive(Debug, Clone, FromRow)]
pub struct CancellationCounts {
    pub total_bookings: i64,
    pub cancelled_bookings: i64,
    pub lost_revenue: f64,
}

/// A booking projected to the fields the top-bookings view reports.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopBooking {
    pub id: DbId,
    pub hotel_id: DbId,
    pub guest_name: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub booking_price: f64,
    pub status: String,
}

/// Sort key for the top-bookings query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopBookingsOrder {
    /// Highest booking price first.
    Price,
    /// Most recent check-in first.
    Date,
}

/// One room type's booking volume and average realized price.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PopularRoomType {
    pub room_type: String,
    pub booking_count: i64,
    pub average_price: f64,
}
