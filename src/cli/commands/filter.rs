use crate::cli::commands::list::print_runs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::runs_in_range;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::{display_date, parse_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Filter { start, end } = cmd {
        let start_date = parse_date(start).ok_or_else(|| AppError::InvalidDate(start.clone()))?;
        let end_date = match end {
            Some(e) if !e.trim().is_empty() => {
                parse_date(e).ok_or_else(|| AppError::InvalidDate(e.clone()))?
            }
            _ => start_date,
        };

        let pool = DbPool::new(&cfg.database);
        let runs = runs_in_range(&pool, &start_date, &end_date)?;

        let from = display_date(&start_date, &cfg.date_format);
        let to = display_date(&end_date, &cfg.date_format);

        if runs.is_empty() {
            info(format!("No runs found between {} and {}.", from, to));
            return Ok(());
        }

        println!("\n--- Runs from {} to {} ---", from, to);
        print_runs(&runs, cfg);
    }

    Ok(())
}
