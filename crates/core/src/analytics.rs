//! Aggregate math for the smart-query endpoints.
//!
//! The repository layer reduces tables to small row sets (per-source counts,
//! per-day occupancy points, check-in/price pairs) and the functions here
//! turn those into the response shapes the API serves. Field names on the
//! serializable structs are contractual: existing API consumers depend on
//! them.
//!
//! Absence of data never produces an error. Every function returns zeroed or
//! empty defaults, except occupancy which reports an explicit tagged
//! `no_data` variant so callers can tell "no metrics rows" apart from
//! "metrics rows with zero occupancy".

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::is_weekend_stay;
use crate::types::DbId;

/// Round to 2 decimal places, matching the precision the API reports for
/// rates, percentages, and currency averages.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Occupancy
// ---------------------------------------------------------------------------

/// One daily-metrics reading. `occupancy_rate` is nullable in the schema;
/// null readings are excluded from the averages but still count as analyzed
/// days.
#[derive(Debug, Clone)]
pub struct OccupancyPoint {
    pub date: NaiveDate,
    pub occupancy_rate: Option<f64>,
}

/// The analyzed date window, inclusive on both ends.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Occupancy statistics for one hotel, or an explicit no-data marker when
/// the hotel has no daily-metrics rows in the requested window.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OccupancyStats {
    Ok {
        hotel_id: DbId,
        days_analyzed: i64,
        average_occupancy: f64,
        max_occupancy: f64,
        min_occupancy: f64,
        date_range: DateRange,
    },
    NoData {
        hotel_id: DbId,
    },
}

/// Summarize daily occupancy readings for a hotel.
///
/// Statistics cover the non-null rates only and are rounded to 2 decimals;
/// if every reading is null the stats are zero but the result is still `Ok`
/// (the rollup job did run, it just recorded no rate).
pub fn occupancy_stats(hotel_id: DbId, points: &[OccupancyPoint]) -> OccupancyStats {
    if points.is_empty() {
        return OccupancyStats::NoData { hotel_id };
    }

    let start = points.iter().map(|p| p.date).min().unwrap_or_default();
    let end = points.iter().map(|p| p.date).max().unwrap_or_default();

    let rates: Vec<f64> = points.iter().filter_map(|p| p.occupancy_rate).collect();

    let (average, max, min) = if rates.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let sum: f64 = rates.iter().sum();
        let max = rates.iter().copied().fold(f64::MIN, f64::max);
        let min = rates.iter().copied().fold(f64::MAX, f64::min);
        (sum / rates.len() as f64, max, min)
    };

    OccupancyStats::Ok {
        hotel_id,
        days_analyzed: points.len() as i64,
        average_occupancy: round2(average),
        max_occupancy: round2(max),
        min_occupancy: round2(min),
        date_range: DateRange { start, end },
    }
}

// ---------------------------------------------------------------------------
// Booking-source distribution
// ---------------------------------------------------------------------------

/// Per-source counts as grouped by the repository layer.
#[derive(Debug, Clone)]
pub struct SourceCount {
    pub source: String,
    pub bookings: i64,
    pub revenue: f64,
}

/// One source's share of all bookings.
#[derive(Debug, Clone, Serialize)]
pub struct SourceShare {
    pub source: String,
    pub booking_count: i64,
    pub percentage: f64,
    pub total_revenue: f64,
}

/// Where bookings come from, sorted by volume.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDistribution {
    pub distribution: Vec<SourceShare>,
    pub total_bookings: i64,
}

/// Compute each source's percentage share and sort descending by count.
///
/// A zero total yields zero percentages rather than dividing by zero.
pub fn source_distribution(rows: &[SourceCount]) -> SourceDistribution {
    let total_bookings: i64 = rows.iter().map(|r| r.bookings).sum();

    let mut distribution: Vec<SourceShare> = rows
        .iter()
        .map(|r| SourceShare {
            source: r.source.clone(),
            booking_count: r.bookings,
            percentage: if total_bookings > 0 {
                round2(r.bookings as f64 / total_bookings as f64 * 100.0)
            } else {
                0.0
            },
            total_revenue: r.revenue,
        })
        .collect();

    distribution.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));

    SourceDistribution {
        distribution,
        total_bookings,
    }
}

// ---------------------------------------------------------------------------
// Weekend vs weekday
// ---------------------------------------------------------------------------

/// A booking reduced to what the weekend comparison needs.
#[derive(Debug, Clone)]
pub struct StaySample {
    pub check_in: NaiveDate,
    pub price: f64,
}

/// Count, revenue, and average price for one partition.
#[derive(Debug, Clone, Serialize)]
pub struct PartitionStats {
    pub booking_count: i64,
    pub total_revenue: f64,
    pub average_price: f64,
}

/// Weekend (Sat/Sun check-in) vs weekday performance for one hotel.
#[derive(Debug, Clone, Serialize)]
pub struct WeekendComparison {
    pub weekend: PartitionStats,
    pub weekday: PartitionStats,
    pub weekend_premium_percent: f64,
}

fn partition_stats(samples: &[&StaySample]) -> PartitionStats {
    let booking_count = samples.len() as i64;
    let total_revenue: f64 = samples.iter().map(|s| s.price).sum();
    let average_price = if booking_count > 0 {
        total_revenue / booking_count as f64
    } else {
        0.0
    };
    PartitionStats {
        booking_count,
        total_revenue,
        average_price,
    }
}

/// Partition stays by check-in weekday and compare the two halves.
///
/// The partition is exhaustive and disjoint: every sample lands in exactly
/// one bucket. The premium percentage is only meaningful when both buckets
/// are populated; otherwise it reports 0.
pub fn compare_weekend_weekday(samples: &[StaySample]) -> WeekendComparison {
    let (weekend, weekday): (Vec<&StaySample>, Vec<&StaySample>) =
        samples.iter().partition(|s| is_weekend_stay(s.check_in));

    let weekend = partition_stats(&weekend);
    let weekday = partition_stats(&weekday);

    let weekend_premium_percent = if weekend.booking_count > 0 && weekday.booking_count > 0 {
        round2((weekend.average_price / weekday.average_price - 1.0) * 100.0)
    } else {
        0.0
    };

    WeekendComparison {
        weekend,
        weekday,
        weekend_premium_percent,
    }
}

// ---------------------------------------------------------------------------
// Cancellations
// ---------------------------------------------------------------------------

/// Cancellation rate and the revenue lost to cancelled bookings.
#[derive(Debug, Clone, Serialize)]
pub struct CancellationAnalysis {
    pub total_bookings: i64,
    pub cancelled_bookings: i64,
    pub cancellation_rate: f64,
    pub lost_revenue: f64,
}

/// Derive the cancellation analysis from raw counts. Zero total bookings
/// yields a zero rate.
pub fn cancellation_analysis(
    total_bookings: i64,
    cancelled_bookings: i64,
    lost_revenue: f64,
) -> CancellationAnalysis {
    let cancellation_rate = if total_bookings > 0 {
        round2(cancelled_bookings as f64 / total_bookings as f64 * 100.0)
    } else {
        0.0
    };

    CancellationAnalysis {
        total_bookings,
        cancelled_bookings,
        cancellation_rate,
        lost_revenue,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- round2 --

    #[test]
    fn round2_rounds_to_nearest_cent() {
        assert_eq!(round2(33.336), 33.34);
        assert_eq!(round2(66.664), 66.66);
        assert_eq!(round2(0.0), 0.0);
    }

    // -- occupancy --

    #[test]
    fn occupancy_empty_is_no_data() {
        let stats = occupancy_stats(99, &[]);
        assert!(matches!(stats, OccupancyStats::NoData { hotel_id: 99 }));
    }

    #[test]
    fn occupancy_averages_non_null_rates() {
        let points = vec![
            OccupancyPoint {
                date: date(2026, 3, 1),
                occupancy_rate: Some(60.0),
            },
            OccupancyPoint {
                date: date(2026, 3, 2),
                occupancy_rate: None,
            },
            OccupancyPoint {
                date: date(2026, 3, 3),
                occupancy_rate: Some(80.0),
            },
        ];
        match occupancy_stats(1, &points) {
            OccupancyStats::Ok {
                days_analyzed,
                average_occupancy,
                max_occupancy,
                min_occupancy,
                date_range,
                ..
            } => {
                // Null reading counts as an analyzed day but not toward stats.
                assert_eq!(days_analyzed, 3);
                assert_eq!(average_occupancy, 70.0);
                assert_eq!(max_occupancy, 80.0);
                assert_eq!(min_occupancy, 60.0);
                assert_eq!(date_range.start, date(2026, 3, 1));
                assert_eq!(date_range.end, date(2026, 3, 3));
            }
            OccupancyStats::NoData { .. } => panic!("expected stats"),
        }
    }

    #[test]
    fn occupancy_all_null_rates_is_zero_not_no_data() {
        let points = vec![OccupancyPoint {
            date: date(2026, 3, 1),
            occupancy_rate: None,
        }];
        match occupancy_stats(1, &points) {
            OccupancyStats::Ok {
                average_occupancy, ..
            } => assert_eq!(average_occupancy, 0.0),
            OccupancyStats::NoData { .. } => panic!("rows exist, should not be no_data"),
        }
    }

    // -- source distribution --

    #[test]
    fn source_percentages_sum_to_100() {
        let rows = vec![
            SourceCount {
                source: "website".into(),
                bookings: 1,
                revenue: 100.0,
            },
            SourceCount {
                source: "direct".into(),
                bookings: 1,
                revenue: 150.0,
            },
            SourceCount {
                source: "expedia".into(),
                bookings: 1,
                revenue: 90.0,
            },
        ];
        let dist = source_distribution(&rows);
        assert_eq!(dist.total_bookings, 3);

        let sum: f64 = dist.distribution.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 0.05, "sum was {sum}");
        for share in &dist.distribution {
            assert!(share.percentage >= 0.0 && share.percentage <= 100.0);
        }
    }

    #[test]
    fn source_distribution_sorted_by_count_desc() {
        let rows = vec![
            SourceCount {
                source: "direct".into(),
                bookings: 2,
                revenue: 200.0,
            },
            SourceCount {
                source: "website".into(),
                bookings: 5,
                revenue: 500.0,
            },
        ];
        let dist = source_distribution(&rows);
        assert_eq!(dist.distribution[0].source, "website");
        assert_eq!(dist.distribution[0].percentage, 71.43);
        assert_eq!(dist.distribution[1].source, "direct");
    }

    #[test]
    fn source_distribution_empty_has_zero_total() {
        let dist = source_distribution(&[]);
        assert_eq!(dist.total_bookings, 0);
        assert!(dist.distribution.is_empty());
    }

    // -- weekend vs weekday --

    #[test]
    fn weekend_partition_is_exhaustive_and_disjoint() {
        // 2026-08-29 Sat, 2026-08-30 Sun, 2026-08-31 Mon, 2026-09-01 Tue.
        let samples = vec![
            StaySample {
                check_in: date(2026, 8, 29),
                price: 200.0,
            },
            StaySample {
                check_in: date(2026, 8, 30),
                price: 240.0,
            },
            StaySample {
                check_in: date(2026, 8, 31),
                price: 100.0,
            },
            StaySample {
                check_in: date(2026, 9, 1),
                price: 120.0,
            },
        ];
        let cmp = compare_weekend_weekday(&samples);
        assert_eq!(
            cmp.weekend.booking_count + cmp.weekday.booking_count,
            samples.len() as i64
        );
        assert_eq!(cmp.weekend.booking_count, 2);
        assert_eq!(cmp.weekend.total_revenue, 440.0);
        assert_eq!(cmp.weekday.average_price, 110.0);
        // (220 / 110 - 1) * 100
        assert_eq!(cmp.weekend_premium_percent, 100.0);
    }

    #[test]
    fn premium_is_zero_when_a_partition_is_empty() {
        let samples = vec![StaySample {
            check_in: date(2026, 8, 31),
            price: 100.0,
        }];
        let cmp = compare_weekend_weekday(&samples);
        assert_eq!(cmp.weekend.booking_count, 0);
        assert_eq!(cmp.weekend.average_price, 0.0);
        assert_eq!(cmp.weekend_premium_percent, 0.0);
    }

    #[test]
    fn empty_samples_give_all_zero_comparison() {
        let cmp = compare_weekend_weekday(&[]);
        assert_eq!(cmp.weekend.booking_count, 0);
        assert_eq!(cmp.weekday.booking_count, 0);
        assert_eq!(cmp.weekend_premium_percent, 0.0);
    }

    // -- cancellations --

    #[test]
    fn cancellation_rate_rounds_to_two_decimals() {
        let analysis = cancellation_analysis(3, 1, 450.0);
        assert_eq!(analysis.cancellation_rate, 33.33);
        assert_eq!(analysis.lost_revenue, 450.0);
        assert!(analysis.cancelled_bookings <= analysis.total_bookings);
    }

    #[test]
    fn cancellation_zero_total_is_zero_rate() {
        let analysis = cancellation_analysis(0, 0, 0.0);
        assert_eq!(analysis.cancellation_rate, 0.0);
    }
}
