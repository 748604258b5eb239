// src/export/pdf_export.rs

use crate::config::Config;
use crate::core::report::RunReport;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use crate::utils::date::{display_date, month_label};
use crate::utils::{format_clock, format_long};
use std::path::Path;

fn pace_cell(pace: Option<f64>) -> String {
    pace.map(|p| format!("{:.2}", p)).unwrap_or_default()
}

/// Render the full report: overall statistics, monthly summary,
/// best efforts and the run list.
pub(crate) fn export_pdf(
    report: &RunReport,
    cfg: &Config,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new(title);

    pdf.heading("Overall Statistics");
    if report.is_empty() {
        pdf.paragraph("No runs logged yet to generate statistics.");
    } else {
        pdf.table(
            &["Metric", "Value"],
            &[
                vec!["Runs".into(), report.run_count.to_string()],
                vec![
                    "Total Distance".into(),
                    format!("{:.2} km", report.total_distance),
                ],
                vec!["Total Time".into(), format_long(report.total_time)],
                vec![
                    "Average Pace".into(),
                    format!("{:.2} min/km", report.average_pace),
                ],
            ],
        );
    }

    pdf.heading("Monthly Summary");
    if report.monthly.is_empty() {
        pdf.paragraph("No monthly data available.");
    } else {
        let rows: Vec<Vec<String>> = report
            .monthly
            .iter()
            .map(|m| {
                vec![
                    month_label(&m.month),
                    format!("{:.2}", m.total_distance),
                    format_long(m.total_time),
                ]
            })
            .collect();
        pdf.table(&["Month", "Total Distance (km)", "Total Time"], &rows);
    }

    pdf.heading("Best Efforts (Fastest Pace)");
    if report.best_efforts.is_empty() {
        pdf.paragraph("No best efforts recorded yet.");
    } else {
        let rows: Vec<Vec<String>> = report
            .best_efforts
            .iter()
            .map(|(distance, run)| {
                vec![
                    format!("{:.1}", distance),
                    format_clock(run.duration),
                    pace_cell(run.pace),
                    display_date(&run.date, &cfg.date_format),
                ]
            })
            .collect();
        pdf.table(&["Distance (km)", "Time", "Pace (min/km)", "Date"], &rows);
    }

    pdf.heading("Logged Runs");
    if report.runs.is_empty() {
        pdf.paragraph("No runs logged yet.");
    } else {
        let rows: Vec<Vec<String>> = report
            .runs
            .iter()
            .map(|run| {
                vec![
                    display_date(&run.date, &cfg.date_format),
                    format!("{:.2}", run.distance),
                    format_clock(run.duration),
                    pace_cell(run.pace),
                    run.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        pdf.table(
            &["Date", "Distance (km)", "Time", "Pace (min/km)", "Notes"],
            &rows,
        );
    }

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
