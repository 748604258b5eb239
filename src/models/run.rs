use chrono::NaiveDate;
use serde::Serialize;

/// A single logged run.
///
/// `pace` is stored independently of `distance`/`duration`: it is derived
/// once at creation time when the caller does not supply it, and an edit
/// may leave it out of sync with the other two fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub id: i64,
    pub date: NaiveDate,       // ⇔ runs.date (TEXT "YYYY-MM-DD")
    pub distance: f64,         // ⇔ runs.distance (REAL, km)
    pub duration: i64,         // ⇔ runs.time (INTEGER, seconds)
    pub pace: Option<f64>,     // ⇔ runs.pace (REAL NULL, min/km)
    pub notes: Option<String>, // ⇔ runs.notes (TEXT NULL)
}

impl Run {
    /// Builds a run that is not stored yet (`id = 0`).
    ///
    /// When `pace` is `None` it is derived from distance and duration,
    /// unless the distance is not positive, in which case it stays `None`.
    pub fn new(
        date: NaiveDate,
        distance: f64,
        duration: i64,
        pace: Option<f64>,
        notes: Option<String>,
    ) -> Self {
        let pace = pace.or_else(|| derive_pace(distance, duration));
        Self {
            id: 0,
            date,
            distance,
            duration,
            pace,
            notes,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Minutes per kilometer, `None` when the distance is not positive.
pub fn derive_pace(distance: f64, duration: i64) -> Option<f64> {
    if distance > 0.0 {
        Some((duration as f64 / 60.0) / distance)
    } else {
        None
    }
}
