//! Duration utilities: parsing HH:MM:SS / MM:SS and formatting seconds.

use crate::errors::{AppError, AppResult};

/// `HH:MM:SS` or `MM:SS` → total seconds.
pub fn parse_duration(s: &str) -> AppResult<i64> {
    let parts: Vec<i64> = s
        .trim()
        .split(':')
        .map(|p| p.trim().parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| AppError::InvalidDuration(s.to_string()))?;

    if parts.iter().any(|p| *p < 0) {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let total = match parts.as_slice() {
        [h, m, sec] => h
            .checked_mul(3600)
            .and_then(|h| m.checked_mul(60)?.checked_add(h))
            .and_then(|hm| hm.checked_add(*sec)),
        [m, sec] => m.checked_mul(60).and_then(|m| m.checked_add(*sec)),
        _ => None,
    };

    // overflow on absurdly large parts is a bad duration too
    total.ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}

/// `MM:SS`, or `HH:MM:SS` once the run reaches an hour.
pub fn format_clock(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// `02h 05m 09s`, used for totals and predictions.
pub fn format_long(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}h {:02}m {:02}s", hours, minutes, seconds)
}
