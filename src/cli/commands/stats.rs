use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::RunReport;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, stat};
use crate::utils::date::{display_date, month_label};
use crate::utils::formatting::describe_distance;
use crate::utils::table::Table;
use crate::utils::{format_clock, format_long, format_pace};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { progress } = cmd {
        let pool = DbPool::new(&cfg.database);
        let report = RunReport::build(&pool, false)?;

        if report.is_empty() {
            info("No runs logged yet to generate statistics.");
            return Ok(());
        }

        print_overall(&report, cfg);
        print_monthly(&report, cfg);
        print_best_efforts(&report, cfg);

        if *progress {
            print_progress(&pool, cfg)?;
        }
    }

    Ok(())
}

fn print_overall(report: &RunReport, cfg: &Config) {
    header("Overall Running Statistics");
    stat("Runs", report.run_count);
    if let Some((first, last)) = &report.first_last {
        stat(
            "Period",
            format!(
                "{} → {}",
                display_date(first, &cfg.date_format),
                display_date(last, &cfg.date_format)
            ),
        );
    }
    stat("Total Distance", format!("{:.2} km", report.total_distance));
    stat("Total Time", format_long(report.total_time));
    stat("Average Pace", format!("{:.2} min/km", report.average_pace));
}

fn print_monthly(report: &RunReport, cfg: &Config) {
    if report.monthly.is_empty() {
        return;
    }

    header("Monthly Summary");
    let mut table = Table::with_headers(&["Month", "Distance", "Time"]);
    for m in &report.monthly {
        table.add_row(vec![
            month_label(&m.month),
            format!("{:.2} km", m.total_distance),
            format_long(m.total_time),
        ]);
    }
    print!("{}", table.render(cfg.separator()));
}

fn print_best_efforts(report: &RunReport, cfg: &Config) {
    if report.best_efforts.is_empty() {
        return;
    }

    header("Best Efforts (Fastest Pace)");
    let mut table = Table::with_headers(&["Distance", "Time", "Pace", "Date"]);
    for (distance, run) in report.best_efforts.iter() {
        table.add_row(vec![
            format!("{:.1} km ({})", distance, describe_distance(distance)),
            format_clock(run.duration),
            format_pace(run.pace),
            display_date(&run.date, &cfg.date_format),
        ]);
    }
    print!("{}", table.render(cfg.separator()));
}

fn print_progress(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let points = StatsLogic::cumulative_progress(pool)?;

    header("Cumulative Progress");
    let mut table = Table::with_headers(&["Date", "Distance", "Time"]);
    for p in &points {
        table.add_row(vec![
            display_date(&p.date, &cfg.date_format),
            format!("{:.2} km", p.cumulative_distance),
            format_long(p.cumulative_time),
        ]);
    }
    print!("{}", table.render(cfg.separator()));
    Ok(())
}
