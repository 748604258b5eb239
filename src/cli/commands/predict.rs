use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::format_long;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Predict { distance, recent } = cmd {
        // --recent wins over the configured window; 0 means every run
        let window = recent.unwrap_or(cfg.prediction_window);
        let window = (window > 0).then_some(window);

        let pool = DbPool::new(&cfg.database);

        let Some(seconds) = StatsLogic::predict_performance(&pool, *distance, window)? else {
            warning("Not enough data to predict performance. Log more runs.");
            return Ok(());
        };

        header("Performance Prediction");
        match window {
            Some(n) => println!("Based on the average pace of your last {} runs,", n),
            None => println!("Based on your average pace,"),
        }
        println!(
            "you can expect to run {:.2} km in approximately {}.",
            distance,
            format_long(seconds)
        );
    }

    Ok(())
}
