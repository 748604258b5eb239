use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_duration;
use crate::utils::{format_clock, format_pace};

/// Log a new run.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        date: date_arg,
        distance,
        time,
        pace,
        notes,
    } = cmd
    {
        //
        // 1. Parse date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Parse duration
        //
        let seconds = parse_duration(time)?;

        //
        // 3. Store
        //
        let pool = DbPool::new(&cfg.database);
        let run = AddLogic::apply(&pool, d, *distance, seconds, *pace, notes.clone())?;

        if pace.is_none() {
            println!("Calculated pace: {}", format_pace(run.pace));
        }

        success(format!(
            "Run {} logged on {}: {:.2} km in {} (Pace: {}).",
            run.id,
            date::display_date(&run.date, &cfg.date_format),
            run.distance,
            format_clock(run.duration),
            format_pace(run.pace)
        ));
    }

    Ok(())
}
