//! Statistics engine.
//!
//! Stateless computations over the record store. Arithmetic edge cases
//! (empty table, zero distance) return sentinels (`0.0`, `0`, `None`)
//! instead of errors; only storage failures are propagated.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::run::Run;
use crate::models::summary::{CumulativePoint, MonthlyTotal};

/// 5k, 10k, half marathon, marathon (km).
pub const CANONICAL_DISTANCES: [f64; 4] = [5.0, 10.0, 21.1, 42.2];

/// Fastest run per canonical distance, in canonical order.
/// Distances without an exact match are simply not present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestEfforts {
    entries: Vec<(f64, Run)>,
}

impl BestEfforts {
    pub fn get(&self, distance: f64) -> Option<&Run> {
        self.entries
            .iter()
            .find(|(d, _)| *d == distance)
            .map(|(_, run)| run)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &Run)> {
        self.entries.iter().map(|(d, run)| (*d, run))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct StatsLogic;

impl StatsLogic {
    pub fn total_distance(pool: &DbPool) -> AppResult<f64> {
        Ok(queries::totals(pool)?.0)
    }

    /// Total seconds across all runs.
    pub fn total_time(pool: &DbPool) -> AppResult<i64> {
        Ok(queries::totals(pool)?.1)
    }

    /// Minutes per km computed from the aggregate totals
    /// (`(total_time / 60) / total_distance`), not a mean of per-run paces.
    pub fn average_pace(pool: &DbPool) -> AppResult<f64> {
        let (distance, time) = queries::totals(pool)?;
        Ok(pace_from_totals(distance, time))
    }

    pub fn cumulative_progress(pool: &DbPool) -> AppResult<Vec<CumulativePoint>> {
        queries::cumulative(pool)
    }

    /// Monthly rollup keyed by raw `YYYY-MM`, newest first.
    pub fn monthly_summary(pool: &DbPool) -> AppResult<Vec<MonthlyTotal>> {
        queries::monthly_totals(pool)
    }

    pub fn best_efforts(pool: &DbPool) -> AppResult<BestEfforts> {
        let mut entries = Vec::new();
        for distance in CANONICAL_DISTANCES {
            if let Some(run) = queries::fastest_for_distance(pool, distance)? {
                entries.push((distance, run));
            }
        }
        Ok(BestEfforts { entries })
    }

    /// Predicted time in whole seconds for `target_distance` km.
    ///
    /// Uses the last `recent` runs when a positive count is given, all runs
    /// otherwise. `None` means there is not enough data.
    pub fn predict_performance(
        pool: &DbPool,
        target_distance: f64,
        recent: Option<usize>,
    ) -> AppResult<Option<i64>> {
        let runs = match recent {
            Some(n) if n > 0 => queries::last_n_runs(pool, n)?,
            _ => queries::all_runs(pool)?,
        };
        Ok(predict_from_runs(&runs, target_distance))
    }

    /// The two most recent runs, most recent first.
    pub fn last_two(pool: &DbPool) -> AppResult<Vec<Run>> {
        queries::last_n_runs(pool, 2)
    }
}

pub fn pace_from_totals(total_distance: f64, total_time: i64) -> f64 {
    if total_distance > 0.0 {
        (total_time as f64 / 60.0) / total_distance
    } else {
        0.0
    }
}

/// Linear forecast: population seconds-per-km (sum over sum) times the
/// target, rounded down to whole seconds.
pub fn predict_from_runs(runs: &[Run], target_distance: f64) -> Option<i64> {
    if runs.is_empty() {
        return None;
    }

    let total_distance: f64 = runs.iter().map(|r| r.distance).sum();
    let total_time: i64 = runs.iter().map(|r| r.duration).sum();

    if total_distance == 0.0 {
        return None;
    }

    let sec_per_km = total_time as f64 / total_distance;
    Some((sec_per_km * target_distance).floor() as i64)
}

/// Percent change of pace from `previous` to `recent`.
///
/// Positive means the recent run was slower (higher min/km), negative
/// means faster. `None` when either pace is missing.
pub fn compare_runs(recent: &Run, previous: &Run) -> Option<f64> {
    let recent_pace = recent.pace?;
    let previous_pace = previous.pace?;
    Some(((recent_pace - previous_pace) / previous_pace) * 100.0)
}
