//! Handler functions, grouped by route prefix.

pub mod hotels;
pub mod smart_queries;
