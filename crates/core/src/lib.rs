//! InnSight domain logic.
//!
//! Pure computations shared by the repository and API layers: booking
//! vocabulary and the pricing model, aggregate math for the smart-query
//! endpoints, limit clamping, and the static query catalog. No database
//! or HTTP dependencies live here.

pub mod analytics;
pub mod booking;
pub mod catalog;
pub mod error;
pub mod limits;
pub mod types;
