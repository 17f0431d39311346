//! Demo-data seeder.
//!
//! Populates an empty database with three hotels, their room inventory, and
//! a few hundred randomized bookings over the past 180 days. Idempotency is
//! coarse: hotels are skipped by name, rooms by per-hotel count, bookings by
//! a global count threshold. Concurrent seeding from multiple processes is
//! not guarded.

use chrono::{Datelike, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;

use innsight_core::booking::{
    self, BookingStatus, RoomType, BOOKING_SOURCES, HIGH_SEASON_MULTIPLIER_RANGE,
    LOW_SEASON_MULTIPLIER_RANGE, WEEKDAY_MULTIPLIER_RANGE, WEEKEND_MULTIPLIER_RANGE,
};

use crate::models::booking::CreateBooking;
use crate::models::hotel::{CreateHotel, Hotel};
use crate::models::room::{CreateRoom, Room};
use crate::repositories::{BookingRepo, HotelRepo, RoomRepo};

/// Number of bookings the seeder aims for by default.
pub const DEFAULT_BOOKING_TARGET: i64 = 500;

/// How far back in time generated check-ins reach.
const BOOKING_WINDOW_DAYS: i64 = 180;

/// Fraction of generated bookings that start out confirmed (the rest are
/// cancelled; past stays are then overridden to completed).
const CONFIRMED_RATIO: f64 = 0.9;

const HOTELS: &[(&str, &str, i64, f64)] = &[
    ("Grand Plaza Mumbai", "Mumbai, Maharashtra", 150, 5.0),
    ("Coastal Inn Goa", "Goa", 80, 4.0),
    ("Heritage Stay Jaipur", "Jaipur, Rajasthan", 60, 4.5),
];

const GUEST_NAMES: &[&str] = &[
    "Rahul Sharma",
    "Priya Patel",
    "Amit Kumar",
    "Sneha Reddy",
    "Vikram Singh",
    "Anjali Gupta",
    "Rohan Desai",
    "Pooja Mehta",
    "Arjun Nair",
    "Kavya Iyer",
    "Sanjay Verma",
    "Neha Kapoor",
    "Karan Shah",
    "Riya Malhotra",
    "Aditya Joshi",
];

/// Counts of what a seeding run left in the database.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub hotels: usize,
    pub rooms: usize,
    pub bookings: i64,
}

/// Seed hotels, rooms, and bookings. Safe to call on every startup.
pub async fn seed_all(pool: &SqlitePool, booking_target: i64) -> Result<SeedSummary, sqlx::Error> {
    let mut rng = StdRng::from_os_rng();

    let hotels = seed_hotels(pool).await?;
    let rooms = seed_rooms(pool, &hotels, &mut rng).await?;
    let bookings = seed_bookings(pool, &rooms, booking_target, &mut rng).await?;

    let summary = SeedSummary {
        hotels: hotels.len(),
        rooms: rooms.len(),
        bookings,
    };
    tracing::info!(
        hotels = summary.hotels,
        rooms = summary.rooms,
        bookings = summary.bookings,
        "Demo data ready"
    );
    Ok(summary)
}

/// Insert the fixed hotel list, reusing any hotel that already exists under
/// the same name.
async fn seed_hotels(pool: &SqlitePool) -> Result<Vec<Hotel>, sqlx::Error> {
    let mut hotels = Vec::with_capacity(HOTELS.len());

    for &(name, location, total_rooms, star_rating) in HOTELS {
        if let Some(existing) = HotelRepo::find_by_name(pool, name).await? {
            hotels.push(existing);
            continue;
        }
        let hotel = HotelRepo::insert(
            pool,
            &CreateHotel {
                name: name.to_string(),
                location: location.to_string(),
                total_rooms,
                star_rating: Some(star_rating),
            },
        )
        .await?;
        hotels.push(hotel);
    }

    tracing::debug!(count = hotels.len(), "Seeded hotels");
    Ok(hotels)
}

/// Room tier for the i-th room of a hotel: first 40% Standard, to 70%
/// Deluxe, to 90% Executive, the rest Suites.
fn room_tier(index: i64, total: i64) -> RoomType {
    let position = index as f64;
    let total = total as f64;
    if position <= total * 0.4 {
        RoomType::Standard
    } else if position <= total * 0.7 {
        RoomType::Deluxe
    } else if position <= total * 0.9 {
        RoomType::Executive
    } else {
        RoomType::Suite
    }
}

/// Generate each hotel's full room inventory, skipping hotels that already
/// have rooms.
async fn seed_rooms(
    pool: &SqlitePool,
    hotels: &[Hotel],
    rng: &mut StdRng,
) -> Result<Vec<Room>, sqlx::Error> {
    let mut rooms = Vec::new();

    for hotel in hotels {
        if RoomRepo::count_by_hotel(pool, hotel.id).await? > 0 {
            rooms.extend(RoomRepo::list_by_hotel(pool, hotel.id).await?);
            continue;
        }

        for i in 1..=hotel.total_rooms {
            let room_type = room_tier(i, hotel.total_rooms);
            let (low, high) = room_type.base_price_range();

            // Pricier rooms for higher-rated properties.
            let rating_factor = hotel.star_rating.unwrap_or(4.0) / 4.0;
            let base_price =
                innsight_core::analytics::round2(rng.random_range(low..high) * rating_factor);

            let room = RoomRepo::insert(
                pool,
                &CreateRoom {
                    hotel_id: hotel.id,
                    // Floor number followed by a two-digit position.
                    room_number: format!("{}{:02}", (i / 10) + 1, i % 10),
                    room_type: room_type.as_str().to_string(),
                    base_price,
                    max_occupancy: room_type.max_occupancy(),
                    is_available: true,
                },
            )
            .await?;
            rooms.push(room);
        }
    }

    tracing::debug!(count = rooms.len(), "Seeded rooms");
    Ok(rooms)
}

/// Generate random bookings until the global count reaches `target`.
/// Returns the total booking count after seeding.
async fn seed_bookings(
    pool: &SqlitePool,
    rooms: &[Room],
    target: i64,
    rng: &mut StdRng,
) -> Result<i64, sqlx::Error> {
    let existing = BookingRepo::count(pool).await?;
    if existing >= target || rooms.is_empty() {
        tracing::debug!(existing, target, "Booking target already met, skipping");
        return Ok(existing);
    }

    let today = Utc::now().date_naive();
    let window_start = today - Duration::days(BOOKING_WINDOW_DAYS);

    for _ in existing..target {
        let room = rooms.choose(rng).expect("rooms is non-empty");

        let days_offset = rng.random_range(0..=BOOKING_WINDOW_DAYS);
        let check_in = window_start + Duration::days(days_offset);
        let nights = rng.random_range(1..=7);
        let check_out = check_in + Duration::days(nights);

        // Day-of-week multiplier: Friday/Saturday check-ins run hot.
        let (low, high) = if booking::is_premium_night(check_in) {
            WEEKEND_MULTIPLIER_RANGE
        } else {
            WEEKDAY_MULTIPLIER_RANGE
        };
        let mut multiplier = rng.random_range(low..high);

        let month = check_in.month();
        if booking::is_high_season(month) {
            let (low, high) = HIGH_SEASON_MULTIPLIER_RANGE;
            multiplier *= rng.random_range(low..high);
        } else if booking::is_low_season(month) {
            let (low, high) = LOW_SEASON_MULTIPLIER_RANGE;
            multiplier *= rng.random_range(low..high);
        }

        let booking_price = booking::stay_price(room.base_price, multiplier, nights);

        let mut status = if rng.random_bool(CONFIRMED_RATIO) {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Cancelled
        };
        // Stays that already ended read as completed regardless of the split.
        if check_out < today {
            status = BookingStatus::Completed;
        }

        let guest_name = *GUEST_NAMES.choose(rng).expect("guest pool is non-empty");
        let guest_email = format!(
            "{}@example.com",
            guest_name.to_lowercase().replace(' ', ".")
        );

        let booked_days_before = days_offset + rng.random_range(1..=30);
        let booking_date = Utc::now().naive_utc() - Duration::days(booked_days_before);

        BookingRepo::insert(
            pool,
            &CreateBooking {
                hotel_id: room.hotel_id,
                room_id: Some(room.id),
                check_in_date: check_in,
                check_out_date: check_out,
                guest_name: Some(guest_name.to_string()),
                guest_email: Some(guest_email),
                num_guests: rng.random_range(1..=room.max_occupancy),
                booking_price,
                base_price: room.base_price * nights as f64,
                booking_date,
                booking_source: BOOKING_SOURCES.choose(rng).map(|s| s.to_string()),
                status: status.as_str().to_string(),
            },
        )
        .await?;
    }

    let total = BookingRepo::count(pool).await?;
    tracing::debug!(count = total, "Seeded bookings");
    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_tiers_cover_the_expected_fractions() {
        let total = 100;
        assert_eq!(room_tier(1, total), RoomType::Standard);
        assert_eq!(room_tier(40, total), RoomType::Standard);
        assert_eq!(room_tier(41, total), RoomType::Deluxe);
        assert_eq!(room_tier(70, total), RoomType::Deluxe);
        assert_eq!(room_tier(71, total), RoomType::Executive);
        assert_eq!(room_tier(90, total), RoomType::Executive);
        assert_eq!(room_tier(91, total), RoomType::Suite);
        assert_eq!(room_tier(100, total), RoomType::Suite);
    }
}
