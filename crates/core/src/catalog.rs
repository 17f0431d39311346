//! Static catalog of the pre-built analytical queries.
//!
//! Served by the API's self-discovery endpoint; no database access.

use serde::Serialize;

/// Describes one pre-built query: its identifier, display name, and the
/// parameters it accepts.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
}

/// All queries the API exposes under `/smart-queries`.
pub const AVAILABLE_QUERIES: &[QueryDescriptor] = &[
    QueryDescriptor {
        id: "total_revenue",
        name: "Total Revenue",
        description: "Get total revenue and booking count with optional filters",
        parameters: &[
            "hotel_id (optional)",
            "start_date (optional)",
            "end_date (optional)",
        ],
    },
    QueryDescriptor {
        id: "occupancy_stats",
        name: "Occupancy Statistics",
        description: "Get average, min, max occupancy for a hotel",
        parameters: &[
            "hotel_id (required)",
            "start_date (optional)",
            "end_date (optional)",
        ],
    },
    QueryDescriptor {
        id: "top_bookings",
        name: "Top Bookings",
        description: "Get highest-priced or most recent bookings",
        parameters: &["limit (optional, default 10)", "order_by (price/date)"],
    },
    QueryDescriptor {
        id: "booking_source_distribution",
        name: "Booking Source Distribution",
        description: "Where do bookings come from? (website, OTA, direct, etc.)",
        parameters: &["hotel_id (optional)"],
    },
    QueryDescriptor {
        id: "weekend_vs_weekday",
        name: "Weekend vs Weekday Comparison",
        description: "Compare performance between weekends and weekdays",
        parameters: &["hotel_id (required)"],
    },
    QueryDescriptor {
        id: "cancellation_analysis",
        name: "Cancellation Analysis",
        description: "Analyze cancellation rate and lost revenue",
        parameters: &["hotel_id (optional)"],
    },
    QueryDescriptor {
        id: "popular_room_types",
        name: "Popular Room Types",
        description: "Most booked room types with average prices",
        parameters: &["hotel_id (required)", "limit (optional, default 5)"],
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_seven_queries() {
        assert_eq!(AVAILABLE_QUERIES.len(), 7);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = AVAILABLE_QUERIES.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), AVAILABLE_QUERIES.len());
    }

    #[test]
    fn every_query_documents_its_parameters() {
        for query in AVAILABLE_QUERIES {
            assert!(!query.parameters.is_empty(), "{} has no parameters", query.id);
        }
    }
}
