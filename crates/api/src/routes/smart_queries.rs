//! Route definitions for the pre-aggregated analytical queries.

use axum::routing::get;
use axum::Router;

use crate::handlers::smart_queries;
use crate::state::AppState;

/// Smart-query routes mounted at `/smart-queries`.
///
/// ```text
/// GET /available                     -> available
/// GET /total-revenue                 -> total_revenue
/// GET /occupancy-stats/{hotel_id}    -> occupancy_stats
/// GET /top-bookings                  -> top_bookings
/// GET /booking-sources               -> booking_sources
/// GET /weekend-vs-weekday/{hotel_id} -> weekend_vs_weekday
/// GET /cancellations                 -> cancellations
/// GET /popular-rooms/{hotel_id}      -> popular_rooms
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/available", get(smart_queries::available))
        .route("/total-revenue", get(smart_queries::total_revenue))
        .route(
            "/occupancy-stats/{hotel_id}",
            get(smart_queries::occupancy_stats),
        )
        .route("/top-bookings", get(smart_queries::top_bookings))
        .route("/booking-sources", get(smart_queries::booking_sources))
        .route(
            "/weekend-vs-weekday/{hotel_id}",
            get(smart_queries::weekend_vs_weekday),
        )
        .route("/cancellations", get(smart_queries::cancellations))
        .route(
            "/popular-rooms/{hotel_id}",
            get(smart_queries::popular_rooms),
        )
}
