//! Result-limit bounds for the smart-query endpoints.
//!
//! This module lives in `core` (zero internal deps) so both the API layer
//! and the repositories clamp with the same constants.

/// Default number of rows returned by the top-bookings query.
pub const DEFAULT_TOP_BOOKINGS_LIMIT: i64 = 10;

/// Maximum number of rows returned by the top-bookings query.
pub const MAX_TOP_BOOKINGS_LIMIT: i64 = 50;

/// Default number of room types returned by the popular-room-types query.
pub const DEFAULT_ROOM_TYPE_LIMIT: i64 = 5;

/// Maximum number of room types returned by the popular-room-types query.
pub const MAX_ROOM_TYPE_LIMIT: i64 = 20;

/// Clamp a user-provided limit into `[1, max]`, falling back to `default`
/// when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
