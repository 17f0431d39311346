//! Route definitions for hotel listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::hotels;
use crate::state::AppState;

/// Hotel routes mounted at `/hotels`.
///
/// ```text
/// GET /     -> list_hotels
/// GET /{id} -> get_hotel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hotels::list_hotels))
        .route("/{id}", get(hotels::get_hotel))
}
