// src/export/logic.rs

use crate::config::Config;
use crate::core::report::RunReport;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{all_runs, runs_in_range};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RunExport;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export runs.
    ///
    /// - `format`: csv | json dump the runs, pdf renders the full report
    /// - `range`: `None`, `"all"` or a period accepted by
    ///   [`parse_range`](crate::export::range::parse_range)
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let runs = match date_bounds {
            None => all_runs(pool)?,
            Some((start, end)) => runs_in_range(pool, &start, &end)?,
        };

        if runs.is_empty() {
            warning("No runs found for selected range.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => {
                let rows: Vec<RunExport> = runs.iter().map(RunExport::from).collect();
                export_csv(&rows, &path)?
            }
            ExportFormat::Json => {
                let rows: Vec<RunExport> = runs.iter().map(RunExport::from).collect();
                export_json(&rows, &path)?
            }
            ExportFormat::Pdf => {
                // statistics always cover every run; the range only filters the run list
                let mut report = RunReport::build(pool, false)?;
                report.runs = runs;
                export_pdf(&report, cfg, &path, &build_pdf_title(range))?
            }
        }

        audit(
            pool,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} export ({})",
                format.as_str(),
                range.as_deref().unwrap_or("all")
            ),
        );

        Ok(())
    }
}

/// Report title based on the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period else {
        return "Running Report".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Running Report - {}", p),
        // YYYY-MM
        7 => match p.split_once('-') {
            Some((year, month)) => format!("Running Report - {} {}", month_name(month), year),
            None => "Running Report".to_string(),
        },
        // YYYY-MM-DD
        10 => format!("Running Report - {}", p),
        // YYYY-MM-DD:YYYY-MM-DD
        21 => match p.split_once(':') {
            Some((from, to)) => format!("Running Report - {} to {}", from, to),
            None => "Running Report".to_string(),
        },
        _ => "Running Report".to_string(),
    }
}
