use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_run;
use crate::errors::AppResult;
use crate::ui::messages::{header, stat, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date::display_date;
use crate::utils::{format_clock, format_km, format_pace};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.database);

        let Some(run) = get_run(&pool, *id)? else {
            warning(format!("Run with ID {} not found.", id));
            return Ok(());
        };

        header(format!("Run {}", run.id));
        stat("Date", display_date(&run.date, &cfg.date_format));
        stat("Distance", format_km(run.distance));
        stat("Time", format_clock(run.duration));
        stat("Pace", colorize_optional(&format_pace(run.pace)));
        stat(
            "Notes",
            colorize_optional(run.notes.as_deref().unwrap_or("--")),
        );
    }

    Ok(())
}
