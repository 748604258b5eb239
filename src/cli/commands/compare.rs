use crate::config::Config;
use crate::core::stats::{StatsLogic, compare_runs};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_pace_change};
use crate::utils::date::display_date;
use crate::utils::format_pace;

/// Compare the last two runs: a positive change means the latest was slower.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database);
    let runs = StatsLogic::last_two(&pool)?;

    let [last, previous] = runs.as_slice() else {
        warning("Not enough runs to compare. At least two runs are required.");
        return Ok(());
    };

    let Some(change) = compare_runs(last, previous) else {
        warning("Could not compare runs due to missing pace data.");
        return Ok(());
    };

    header("Comparing last two runs");
    println!(
        "  - Run on {}: Pace: {}",
        display_date(&previous.date, &cfg.date_format),
        format_pace(previous.pace)
    );
    println!(
        "  - Run on {}: Pace: {}",
        display_date(&last.date, &cfg.date_format),
        format_pace(last.pace)
    );

    let label = if change > 0.0 { "slower" } else { "faster" };
    println!(
        "Improvement: {}{:.2}% {}{}.",
        color_for_pace_change(change),
        change.abs(),
        label,
        RESET
    );

    Ok(())
}
