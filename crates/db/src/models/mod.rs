//! Entity structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and a `Deserialize` create DTO for inserts. `report`
//! holds the aggregate row and response shapes for the smart queries.

pub mod booking;
pub mod daily_metrics;
pub mod hotel;
pub mod report;
pub mod room;
