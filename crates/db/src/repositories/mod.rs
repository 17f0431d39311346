//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument.

pub mod booking_repo;
pub mod daily_metrics_repo;
pub mod hotel_repo;
pub mod report_repo;
pub mod room_repo;

pub use booking_repo::BookingRepo;
pub use daily_metrics_repo::DailyMetricsRepo;
pub use hotel_repo::HotelRepo;
pub use report_repo::ReportRepo;
pub use room_repo::RoomRepo;
