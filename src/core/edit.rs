use crate::core::add::normalize_notes;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{get_run, update_run};
use crate::errors::{AppError, AppResult};
use crate::models::run::{Run, derive_pace};
use chrono::NaiveDate;

/// Replacement values for an edit. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct RunChanges {
    pub date: Option<NaiveDate>,
    pub distance: Option<f64>,
    pub duration: Option<i64>,
    pub pace: Option<f64>,
    /// Derive pace again from the (possibly edited) distance and duration.
    pub recalc_pace: bool,
    /// `Some("")` clears the notes.
    pub notes: Option<String>,
}

pub struct EditLogic;

impl EditLogic {
    /// Apply `changes` to run `id` and return the updated run.
    ///
    /// Pace is a stored field: editing distance or duration leaves it alone
    /// unless a new pace or `recalc_pace` is given.
    pub fn apply(pool: &DbPool, id: i64, changes: RunChanges) -> AppResult<Run> {
        let current = get_run(pool, id)?.ok_or(AppError::RunNotFound(id))?;
        let updated = merge(current, changes)?;

        if !update_run(pool, id, &updated)? {
            return Err(AppError::RunNotFound(id));
        }

        audit(
            pool,
            "edit",
            &id.to_string(),
            &format!(
                "Run set to {:.2} km in {}s on {}",
                updated.distance,
                updated.duration,
                updated.date_str()
            ),
        );

        Ok(updated)
    }
}

fn merge(mut run: Run, changes: RunChanges) -> AppResult<Run> {
    if let Some(d) = changes.date {
        run.date = d;
    }
    if let Some(d) = changes.distance {
        run.distance = d;
    }
    if let Some(t) = changes.duration {
        run.duration = t;
    }

    if let Some(p) = changes.pace {
        run.pace = Some(p);
    } else if changes.recalc_pace {
        run.pace = Some(derive_pace(run.distance, run.duration).ok_or_else(|| {
            AppError::InvalidDistance(format!(
                "{} (distance must be greater than 0 to calculate pace)",
                run.distance
            ))
        })?);
    }

    if let Some(n) = changes.notes {
        run.notes = normalize_notes(Some(n));
    }

    Ok(run)
}
