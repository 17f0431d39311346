pub mod health;
pub mod hotels;
pub mod smart_queries;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /hotels                                   list hotels
/// /hotels/{id}                              get hotel
///
/// /smart-queries/available                  query catalog
/// /smart-queries/total-revenue              revenue + booking count
/// /smart-queries/occupancy-stats/{hotel_id} occupancy summary
/// /smart-queries/top-bookings               platform-wide ranking
/// /smart-queries/booking-sources            source distribution
/// /smart-queries/weekend-vs-weekday/{hotel_id}
/// /smart-queries/cancellations              cancellation analysis
/// /smart-queries/popular-rooms/{hotel_id}   room types by volume
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/hotels", hotels::router())
        .nest("/smart-queries", smart_queries::router())
}
