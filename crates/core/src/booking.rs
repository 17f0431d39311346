//! Booking vocabulary and the point-in-time pricing model.
//!
//! A booking's price is computed exactly once at creation from the room's
//! base price, a day-of-week multiplier, a seasonal multiplier, and the stay
//! duration. It is never recomputed, so historical bookings are immune to
//! later changes in these constants.

use chrono::{Datelike, NaiveDate, Weekday};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Booking origin channels used by the demo-data seeder. The schema stores
/// the source as free text, so analytics must not assume this closed set.
pub const BOOKING_SOURCES: &[&str] =
    &["website", "booking.com", "direct", "expedia", "makemytrip"];

/// Day-of-week price multiplier range for Friday/Saturday check-ins.
pub const WEEKEND_MULTIPLIER_RANGE: (f64, f64) = (1.2, 1.5);

/// Day-of-week price multiplier range for all other check-ins.
pub const WEEKDAY_MULTIPLIER_RANGE: (f64, f64) = (0.85, 1.15);

/// Seasonal multiplier range for high season (October through January).
pub const HIGH_SEASON_MULTIPLIER_RANGE: (f64, f64) = (1.1, 1.3);

/// Seasonal multiplier range for low season (June through August).
pub const LOW_SEASON_MULTIPLIER_RANGE: (f64, f64) = (0.7, 0.9);

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The four room tiers a hotel offers, ordered cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    Standard,
    Deluxe,
    Executive,
    Suite,
}

impl RoomType {
    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Executive => "Executive",
            RoomType::Suite => "Suite",
        }
    }

    /// Nightly base-price range in the seeder's pricing tiers.
    pub fn base_price_range(&self) -> (f64, f64) {
        match self {
            RoomType::Standard => (3000.0, 5000.0),
            RoomType::Deluxe => (5000.0, 8000.0),
            RoomType::Executive => (8000.0, 12000.0),
            RoomType::Suite => (12000.0, 20000.0),
        }
    }

    /// Maximum occupancy per room tier.
    pub fn max_occupancy(&self) -> i64 {
        match self {
            RoomType::Standard | RoomType::Deluxe => 2,
            RoomType::Executive | RoomType::Suite => 4,
        }
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// String representation for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Parse from a string, defaulting to `Confirmed` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Confirmed,
        }
    }

    /// Whether the booking counts toward realized revenue.
    pub fn is_revenue(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }
}

// ---------------------------------------------------------------------------
// Calendar predicates
// ---------------------------------------------------------------------------

/// Whether a check-in date falls on the analytical weekend (Saturday or
/// Sunday). Used by the weekend-vs-weekday comparison.
pub fn is_weekend_stay(check_in: NaiveDate) -> bool {
    matches!(check_in.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether a check-in date attracts the weekend pricing premium. Demand
/// peaks on Friday and Saturday nights, so the premium window differs from
/// the analytical weekend above.
pub fn is_premium_night(check_in: NaiveDate) -> bool {
    matches!(check_in.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Whether a month falls in high season (October through January).
pub fn is_high_season(month: u32) -> bool {
    matches!(month, 10 | 11 | 12 | 1)
}

/// Whether a month falls in low season (June through August).
pub fn is_low_season(month: u32) -> bool {
    matches!(month, 6 | 7 | 8)
}

/// Total stay price: nightly base price times the combined day-of-week and
/// seasonal multiplier, times the number of nights, rounded to 2 decimals.
pub fn stay_price(base_price: f64, multiplier: f64, nights: i64) -> f64 {
    crate::analytics::round2(base_price * multiplier * nights as f64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
