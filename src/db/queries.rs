//! Record store: every read and write against the `runs` table.
//!
//! Each function acquires its own connection from the [`DbPool`] handle,
//! so every call is an independent, auto-committed unit of work.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::run::Run;
use crate::models::summary::{CumulativePoint, MonthlyTotal};
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Result, Row, params};

const RUN_COLUMNS: &str = "id, date, distance, time, pace, notes";

fn parse_db_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.to_string())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<Run> {
    let date_str: String = row.get("date")?;

    Ok(Run {
        id: row.get("id")?,
        date: parse_db_date(&date_str)?,
        distance: row.get("distance")?,
        duration: row.get("time")?,
        pace: row.get("pace")?,
        notes: row.get("notes")?,
    })
}

fn collect_runs(pool: &DbPool, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<Run>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(args, map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

/// Append a new run and return the id assigned by SQLite.
pub fn insert_run(pool: &DbPool, run: &Run) -> AppResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO runs (date, distance, time, pace, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                run.date_str(),
                run.distance,
                run.duration,
                run.pace,
                run.notes
            ],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

pub fn get_run(pool: &DbPool, id: i64) -> AppResult<Option<Run>> {
    pool.with_conn(|conn| {
        let run = conn
            .query_row(
                &format!("SELECT {RUN_COLUMNS} FROM runs WHERE id = ?1"),
                [id],
                map_row,
            )
            .optional()?;
        Ok(run)
    })
}

/// Replace every mutable field of run `id`. Returns whether it existed.
pub fn update_run(pool: &DbPool, id: i64, run: &Run) -> AppResult<bool> {
    pool.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE runs
             SET date = ?1, distance = ?2, time = ?3, pace = ?4, notes = ?5
             WHERE id = ?6",
            params![
                run.date_str(),
                run.distance,
                run.duration,
                run.pace,
                run.notes,
                id
            ],
        )?;
        Ok(changed > 0)
    })
}

/// Remove run `id`. A missing id is a no-op that returns `false`.
pub fn delete_run(pool: &DbPool, id: i64) -> AppResult<bool> {
    pool.with_conn(|conn| {
        let changed = conn.execute("DELETE FROM runs WHERE id = ?1", [id])?;
        Ok(changed > 0)
    })
}

/// Runs with `start <= date <= end`, most recent first.
pub fn runs_in_range(pool: &DbPool, start: &NaiveDate, end: &NaiveDate) -> AppResult<Vec<Run>> {
    collect_runs(
        pool,
        &format!(
            "SELECT {RUN_COLUMNS} FROM runs
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC, id DESC"
        ),
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
    )
}

pub fn all_runs(pool: &DbPool) -> AppResult<Vec<Run>> {
    collect_runs(
        pool,
        &format!("SELECT {RUN_COLUMNS} FROM runs ORDER BY date DESC, id DESC"),
        [],
    )
}

/// The `n` most recent runs. Same-day runs are disambiguated by id so
/// "most recent" is always well defined.
pub fn last_n_runs(pool: &DbPool, n: usize) -> AppResult<Vec<Run>> {
    let limit = i64::try_from(n).unwrap_or(i64::MAX);
    collect_runs(
        pool,
        &format!("SELECT {RUN_COLUMNS} FROM runs ORDER BY date DESC, id DESC LIMIT ?1"),
        [limit],
    )
}

/// Distance and time per `YYYY-MM`, newest month first.
pub fn monthly_totals(pool: &DbPool) -> AppResult<Vec<MonthlyTotal>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT strftime('%Y-%m', date) AS month,
                    SUM(distance) AS total_distance,
                    SUM(time) AS total_time
             FROM runs
             GROUP BY month
             ORDER BY month DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(MonthlyTotal {
                month: row.get(0)?,
                total_distance: row.get(1)?,
                total_time: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

/// Fastest-paced run whose distance is exactly `distance`.
///
/// The match is floating-point equality: a run logged as 5.00000001 km is
/// not a 5 km run.
///
/// Runs without a pace never win over a paced run: SQLite would sort NULL
/// first under a plain `ORDER BY pace ASC`, so NULLs are pushed last
/// explicitly. A NULL-paced run is only returned when no run at that
/// distance has a pace.
pub fn fastest_for_distance(pool: &DbPool, distance: f64) -> AppResult<Option<Run>> {
    pool.with_conn(|conn| {
        let run = conn
            .query_row(
                &format!(
                    "SELECT {RUN_COLUMNS} FROM runs
                     WHERE distance = ?1
                     ORDER BY pace IS NULL, pace ASC
                     LIMIT 1"
                ),
                [distance],
                map_row,
            )
            .optional()?;
        Ok(run)
    })
}

/// Sum of distance and of duration over the whole table, read in a single
/// statement so both values come from the same snapshot.
pub fn totals(pool: &DbPool) -> AppResult<(f64, i64)> {
    pool.with_conn(|conn| {
        let (distance, time): (Option<f64>, Option<i64>) = conn.query_row(
            "SELECT SUM(distance), SUM(time) FROM runs",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((distance.unwrap_or(0.0), time.unwrap_or(0)))
    })
}

/// Running totals by ascending date.
///
/// The window is ordered by date only, so runs sharing a date all report
/// the total reached at the end of that date.
pub fn cumulative(pool: &DbPool) -> AppResult<Vec<CumulativePoint>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT date,
                    SUM(distance) OVER (ORDER BY date) AS cumulative_distance,
                    SUM(time) OVER (ORDER BY date) AS cumulative_time
             FROM runs
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let date_str: String = row.get(0)?;
            Ok(CumulativePoint {
                date: parse_db_date(&date_str)?,
                cumulative_distance: row.get(1)?,
                cumulative_time: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

pub fn count_runs(pool: &DbPool) -> AppResult<i64> {
    pool.with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))?))
}

/// First and last run date, `None` on an empty table.
pub fn date_bounds(pool: &DbPool) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    pool.with_conn(|conn| {
        let (first, last): (Option<String>, Option<String>) =
            conn.query_row("SELECT MIN(date), MAX(date) FROM runs", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

        match (first, last) {
            (Some(f), Some(l)) => Ok(Some((parse_db_date(&f)?, parse_db_date(&l)?))),
            _ => Ok(None),
        }
    })
}
