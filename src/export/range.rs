// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse `--range` into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid(r, "start and end must have the same format"));
        }

        let (d1, _) = period_bounds(start).ok_or_else(|| invalid(r, "invalid start"))?;
        let (_, d2) = period_bounds(end).ok_or_else(|| invalid(r, "invalid end"))?;

        if d1 > d2 {
            return Err(invalid(r, "start is after end"));
        }
        Ok((d1, d2))
    } else {
        period_bounds(r.trim()).ok_or_else(|| invalid(r, "unsupported format"))
    }
}

/// First and last day of a year, a month, or a single day.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p.get(0..4)?.parse().ok()?;
            let m: u32 = p.get(5..7)?.parse().ok()?;
            let first = NaiveDate::from_ymd_opt(y, m, 1)?;
            Some((first, month_last_day(first)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    first
        .checked_add_months(chrono::Months::new(1))?
        .pred_opt()
}

fn invalid(r: &str, reason: &str) -> AppError {
    AppError::InvalidRange(format!("{r} ({reason})"))
}
