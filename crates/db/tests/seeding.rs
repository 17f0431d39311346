//! Tests for the demo-data seeder: shape of the generated data and the
//! coarse idempotency guarantees.

use sqlx::SqlitePool;

use innsight_core::booking::{BookingStatus, BOOKING_SOURCES};
use innsight_db::repositories::{BookingRepo, HotelRepo, RoomRepo};
use innsight_db::seed;

const TEST_BOOKING_TARGET: i64 = 40;

#[sqlx::test(migrations = "./migrations")]
async fn seed_populates_hotels_rooms_and_bookings(pool: SqlitePool) {
    let summary = seed::seed_all(&pool, TEST_BOOKING_TARGET).await.unwrap();

    assert_eq!(summary.hotels, 3);
    // 150 + 80 + 60 rooms across the three fixed hotels.
    assert_eq!(summary.rooms, 290);
    assert_eq!(summary.bookings, TEST_BOOKING_TARGET);
}

#[sqlx::test(migrations = "./migrations")]
async fn seeding_twice_does_not_duplicate(pool: SqlitePool) {
    let first = seed::seed_all(&pool, TEST_BOOKING_TARGET).await.unwrap();
    let second = seed::seed_all(&pool, TEST_BOOKING_TARGET).await.unwrap();

    assert_eq!(first.hotels, second.hotels);
    assert_eq!(first.rooms, second.rooms);
    assert_eq!(first.bookings, second.bookings);
    assert_eq!(BookingRepo::count(&pool).await.unwrap(), TEST_BOOKING_TARGET);
}

#[sqlx::test(migrations = "./migrations")]
async fn generated_bookings_are_well_formed(pool: SqlitePool) {
    seed::seed_all(&pool, TEST_BOOKING_TARGET).await.unwrap();

    let hotels = HotelRepo::list(&pool).await.unwrap();
    assert_eq!(hotels.len(), 3);

    for hotel in &hotels {
        let rooms = RoomRepo::list_by_hotel(&pool, hotel.id).await.unwrap();
        assert_eq!(rooms.len() as i64, hotel.total_rooms);
        for room in &rooms {
            assert!(room.base_price > 0.0);
            assert!(room.max_occupancy == 2 || room.max_occupancy == 4);
        }
    }

    for id in 1..=TEST_BOOKING_TARGET {
        let booking = BookingRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert!(booking.check_out_date > booking.check_in_date);
        assert!(booking.booking_price > 0.0);
        assert!(booking.num_guests >= 1);
        assert!(matches!(
            BookingStatus::from_str(&booking.status),
            BookingStatus::Confirmed | BookingStatus::Completed | BookingStatus::Cancelled
        ));
        let source = booking.booking_source.as_deref().unwrap();
        assert!(BOOKING_SOURCES.contains(&source));
    }
}
