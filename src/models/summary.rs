//! Aggregate rows produced by the store and the statistics engine.

use chrono::NaiveDate;
use serde::Serialize;

/// Distance and time totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String, // "YYYY-MM"
    pub total_distance: f64,
    pub total_time: i64,
}

/// Running totals up to and including `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cumulative_distance: f64,
    pub cumulative_time: i64,
}
