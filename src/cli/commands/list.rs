use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::all_runs;
use crate::errors::AppResult;
use crate::models::run::Run;
use crate::ui::messages::info;
use crate::utils::date::display_date;
use crate::utils::table::Table;
use crate::utils::{format_clock, format_pace};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database);
    let runs = all_runs(&pool)?;

    if runs.is_empty() {
        info("No runs logged yet.");
        return Ok(());
    }

    println!("\n--- Your Runs ---");
    print_runs(&runs, cfg);
    Ok(())
}

/// Render runs as a table, in the order given.
pub fn print_runs(runs: &[Run], cfg: &Config) {
    let mut table = Table::with_headers(&["ID", "Date", "Distance", "Time", "Pace", "Notes"]);

    for run in runs {
        table.add_row(vec![
            run.id.to_string(),
            display_date(&run.date, &cfg.date_format),
            format!("{:.2} km", run.distance),
            format_clock(run.duration),
            format_pace(run.pace),
            run.notes.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render(cfg.separator()));
}
