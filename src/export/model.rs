// src/export/model.rs

use crate::models::run::Run;
use crate::utils::time::format_clock;
use serde::Serialize;

/// Flat record used by the CSV and JSON exports.
///
/// `pace` and `notes` stay optional so a missing value exports as an
/// empty cell / `null` rather than as `0` or `""`.
#[derive(Serialize, Clone, Debug)]
pub struct RunExport {
    pub id: i64,
    pub date: String,
    pub distance_km: f64,
    pub duration_s: i64,
    pub duration: String,
    pub pace_min_km: Option<f64>,
    pub notes: Option<String>,
}

impl From<&Run> for RunExport {
    fn from(run: &Run) -> Self {
        Self {
            id: run.id,
            date: run.date_str(),
            distance_km: run.distance,
            duration_s: run.duration,
            duration: format_clock(run.duration),
            pace_min_km: run.pace,
            notes: run.notes.clone(),
        }
    }
}
