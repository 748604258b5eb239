use crate::core::stats::{BestEfforts, StatsLogic, pace_from_totals};
use crate::db::pool::DbPool;
use crate::db::queries::{all_runs, count_runs, date_bounds, totals};
use crate::errors::AppResult;
use crate::models::run::Run;
use crate::models::summary::MonthlyTotal;
use chrono::NaiveDate;

/// Everything the console `stats` view and the PDF report show,
/// gathered in one pass over the store.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_count: i64,
    pub first_last: Option<(NaiveDate, NaiveDate)>,
    pub total_distance: f64,
    pub total_time: i64,
    pub average_pace: f64,
    pub monthly: Vec<MonthlyTotal>,
    pub best_efforts: BestEfforts,
    pub runs: Vec<Run>,
}

impl RunReport {
    pub fn build(pool: &DbPool, include_runs: bool) -> AppResult<Self> {
        let runs = if include_runs {
            all_runs(pool)?
        } else {
            Vec::new()
        };

        // one statement for both sums so the average matches the totals
        let (total_distance, total_time) = totals(pool)?;

        Ok(Self {
            run_count: count_runs(pool)?,
            first_last: date_bounds(pool)?,
            total_distance,
            total_time,
            average_pace: pace_from_totals(total_distance, total_time),
            monthly: StatsLogic::monthly_summary(pool)?,
            best_efforts: StatsLogic::best_efforts(pool)?,
            runs,
        })
    }

    /// No distance logged yet: nothing meaningful to report.
    pub fn is_empty(&self) -> bool {
        self.total_distance == 0.0
    }
}
