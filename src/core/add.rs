use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_run;
use crate::errors::{AppError, AppResult};
use crate::models::run::Run;
use chrono::NaiveDate;

/// High-level business logic for the `log` command.
pub struct AddLogic;

impl AddLogic {
    /// Store a new run and return it with its assigned id.
    ///
    /// - `pace = None` → derived from distance and duration, which needs a
    ///   positive distance
    /// - empty `notes` are stored as NULL
    pub fn apply(
        pool: &DbPool,
        date: NaiveDate,
        distance: f64,
        duration: i64,
        pace: Option<f64>,
        notes: Option<String>,
    ) -> AppResult<Run> {
        if pace.is_none() && distance <= 0.0 {
            return Err(AppError::InvalidDistance(format!(
                "{distance} (distance must be greater than 0 to calculate pace)"
            )));
        }

        let mut run = Run::new(date, distance, duration, pace, normalize_notes(notes));
        run.id = insert_run(pool, &run)?;

        audit(
            pool,
            "log",
            &run.id.to_string(),
            &format!(
                "Logged {:.2} km in {}s on {}",
                run.distance,
                run.duration,
                run.date_str()
            ),
        );

        Ok(run)
    }
}

/// `Some("")` and whitespace-only notes collapse to `None`.
pub fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}
