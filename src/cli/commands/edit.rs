use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, RunChanges};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_duration;
use crate::utils::{format_clock, format_pace};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        distance,
        time,
        pace,
        recalc_pace,
        notes,
    } = cmd
    {
        let date = match date {
            Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let duration = match time {
            Some(t) => Some(parse_duration(t)?),
            None => None,
        };

        let changes = RunChanges {
            date,
            distance: *distance,
            duration,
            pace: *pace,
            recalc_pace: *recalc_pace,
            notes: notes.clone(),
        };

        let pool = DbPool::new(&cfg.database);
        let run = EditLogic::apply(&pool, *id, changes)?;

        if *recalc_pace {
            println!("Recalculated pace: {}", format_pace(run.pace));
        }

        success(format!(
            "Run with ID {} updated: {:.2} km in {} (Pace: {}).",
            id,
            run.distance,
            format_clock(run.duration),
            format_pace(run.pace)
        ));
    }

    Ok(())
}
