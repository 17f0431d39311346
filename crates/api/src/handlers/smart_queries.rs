//! Handlers for the pre-aggregated analytical queries.
//!
//! Every operation is a pure read: the repository reduces tables to small
//! row sets and the `innsight_core::analytics` functions shape them into
//! the documented response payloads. Top-level field names are contractual,
//! so payloads are serialized directly rather than wrapped in an envelope.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use innsight_core::analytics::{
    self, CancellationAnalysis, OccupancyPoint, OccupancyStats, SourceCount, SourceDistribution,
    StaySample, WeekendComparison,
};
use innsight_core::catalog::{QueryDescriptor, AVAILABLE_QUERIES};
use innsight_core::limits::{
    clamp_limit, DEFAULT_ROOM_TYPE_LIMIT, DEFAULT_TOP_BOOKINGS_LIMIT, MAX_ROOM_TYPE_LIMIT,
    MAX_TOP_BOOKINGS_LIMIT,
};
use innsight_core::types::DbId;
use innsight_db::models::report::{RevenueFilters, RevenueReport, TopBookingsOrder};
use innsight_db::repositories::{DailyMetricsRepo, ReportRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RevenueParams {
    pub hotel_id: Option<DbId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct DateWindowParams {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct TopBookingsParams {
    pub limit: Option<i64>,
    pub order_by: Option<TopBookingsOrder>,
}

#[derive(Debug, Deserialize)]
pub struct HotelScopeParams {
    pub hotel_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct RoomTypeParams {
    pub limit: Option<i64>,
}

/// Catalog payload for the self-discovery endpoint.
#[derive(Debug, Serialize)]
pub struct AvailableQueries {
    pub queries: &'static [QueryDescriptor],
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/smart-queries/available
///
/// Static catalog of the pre-built queries. No database access.
pub async fn available() -> Json<AvailableQueries> {
    Json(AvailableQueries {
        queries: AVAILABLE_QUERIES,
    })
}

/// GET /api/v1/smart-queries/total-revenue
///
/// Revenue and booking count over confirmed/completed bookings, with the
/// applied filters echoed back. Empty result sets report 0.0, never null.
pub async fn total_revenue(
    State(state): State<AppState>,
    Query(params): Query<RevenueParams>,
) -> AppResult<impl IntoResponse> {
    let totals = ReportRepo::revenue_totals(
        &state.pool,
        params.hotel_id,
        params.start_date,
        params.end_date,
    )
    .await?;

    Ok(Json(RevenueReport {
        total_revenue: totals.total_revenue,
        booking_count: totals.booking_count,
        filters: RevenueFilters {
            hotel_id: params.hotel_id,
            start_date: params.start_date,
            end_date: params.end_date,
        },
    }))
}

/// GET /api/v1/smart-queries/occupancy-stats/{hotel_id}
///
/// Average/min/max occupancy from the daily rollup. A hotel with no rollup
/// rows in the window gets the tagged `no_data` variant, not a zero-filled
/// payload.
pub async fn occupancy_stats(
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
    Query(params): Query<DateWindowParams>,
) -> AppResult<Json<OccupancyStats>> {
    let rows = DailyMetricsRepo::list_for_hotel(
        &state.pool,
        hotel_id,
        params.start_date,
        params.end_date,
    )
    .await?;

    let points: Vec<OccupancyPoint> = rows
        .iter()
        .map(|m| OccupancyPoint {
            date: m.date,
            occupancy_rate: m.occupancy_rate,
        })
        .collect();

    Ok(Json(analytics::occupancy_stats(hotel_id, &points)))
}

/// GET /api/v1/smart-queries/top-bookings
///
/// Highest-priced or most recent bookings across all hotels. Deliberately
/// not hotel-scoped: this backs the platform-wide ranking view.
pub async fn top_bookings(
    State(state): State<AppState>,
    Query(params): Query<TopBookingsParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_TOP_BOOKINGS_LIMIT, MAX_TOP_BOOKINGS_LIMIT);
    let order_by = params.order_by.unwrap_or(TopBookingsOrder::Price);

    let bookings = ReportRepo::top_bookings(&state.pool, limit, order_by).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/smart-queries/booking-sources
///
/// Booking count, revenue, and percentage share per origin channel, sorted
/// by volume.
pub async fn booking_sources(
    State(state): State<AppState>,
    Query(params): Query<HotelScopeParams>,
) -> AppResult<Json<SourceDistribution>> {
    let buckets = ReportRepo::source_buckets(&state.pool, params.hotel_id).await?;

    let counts: Vec<SourceCount> = buckets
        .into_iter()
        .map(|b| SourceCount {
            source: b.booking_source,
            bookings: b.bookings,
            revenue: b.revenue,
        })
        .collect();

    Ok(Json(analytics::source_distribution(&counts)))
}

/// GET /api/v1/smart-queries/weekend-vs-weekday/{hotel_id}
///
/// Weekend (Sat/Sun check-in) vs weekday performance for one hotel.
pub async fn weekend_vs_weekday(
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
) -> AppResult<Json<WeekendComparison>> {
    let rows = ReportRepo::stay_rows(&state.pool, hotel_id).await?;

    let samples: Vec<StaySample> = rows
        .into_iter()
        .map(|r| StaySample {
            check_in: r.check_in_date,
            price: r.booking_price,
        })
        .collect();

    Ok(Json(analytics::compare_weekend_weekday(&samples)))
}

/// GET /api/v1/smart-queries/cancellations
///
/// Cancellation rate and lost revenue, platform-wide or for one hotel.
pub async fn cancellations(
    State(state): State<AppState>,
    Query(params): Query<HotelScopeParams>,
) -> AppResult<Json<CancellationAnalysis>> {
    let counts = ReportRepo::cancellation_counts(&state.pool, params.hotel_id).await?;

    Ok(Json(analytics::cancellation_analysis(
        counts.total_bookings,
        counts.cancelled_bookings,
        counts.lost_revenue,
    )))
}

/// GET /api/v1/smart-queries/popular-rooms/{hotel_id}
///
/// A hotel's room types ranked by booking volume.
pub async fn popular_rooms(
    State(state): State<AppState>,
    Path(hotel_id): Path<DbId>,
    Query(params): Query<RoomTypeParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_ROOM_TYPE_LIMIT, MAX_ROOM_TYPE_LIMIT);

    let room_types = ReportRepo::popular_room_types(&state.pool, hotel_id, limit).await?;
    Ok(Json(room_types))
}
