use runlog::core::stats::{CANONICAL_DISTANCES, StatsLogic, compare_runs, predict_from_runs};
use runlog::models::run::Run;

mod common;
use common::{add, add_with_pace, fresh_pool, ymd};

fn run_with_pace(pace: Option<f64>) -> Run {
    Run {
        id: 1,
        date: ymd(2024, 1, 1),
        distance: 5.0,
        duration: 1500,
        pace,
        notes: None,
    }
}

#[test]
fn test_empty_store_sentinels() {
    let pool = fresh_pool("stats_empty");

    assert_eq!(StatsLogic::total_distance(&pool).unwrap(), 0.0);
    assert_eq!(StatsLogic::total_time(&pool).unwrap(), 0);
    assert_eq!(StatsLogic::average_pace(&pool).unwrap(), 0.0);
    assert!(StatsLogic::cumulative_progress(&pool).unwrap().is_empty());
    assert!(StatsLogic::monthly_summary(&pool).unwrap().is_empty());
    assert!(StatsLogic::best_efforts(&pool).unwrap().is_empty());
    assert_eq!(StatsLogic::predict_performance(&pool, 10.0, None).unwrap(), None);
}

#[test]
fn test_totals_match_sums() {
    let pool = fresh_pool("stats_totals");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    add(&pool, ymd(2024, 3, 2), 10.5, 3300);
    add(&pool, ymd(2024, 3, 3), 3.5, 1200);

    assert_eq!(StatsLogic::total_distance(&pool).unwrap(), 19.0);
    assert_eq!(StatsLogic::total_time(&pool).unwrap(), 6000);
}

#[test]
fn test_average_pace_from_totals() {
    let pool = fresh_pool("stats_average_pace");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    assert_eq!(StatsLogic::average_pace(&pool).unwrap(), 5.0);

    // 4 km in 1500 s: mean of paces would be 5.625, totals give 6000/60/9
    add(&pool, ymd(2024, 3, 2), 4.0, 1500);
    let expected = (3000.0 / 60.0) / 9.0;
    assert!((StatsLogic::average_pace(&pool).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_predict_performance_single_run() {
    let pool = fresh_pool("stats_predict_single");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);

    assert_eq!(
        StatsLogic::predict_performance(&pool, 10.0, None).unwrap(),
        Some(3000)
    );
}

#[test]
fn test_predict_performance_recent_window() {
    let pool = fresh_pool("stats_predict_recent");

    add(&pool, ymd(2024, 3, 1), 5.0, 3000);
    add(&pool, ymd(2024, 3, 2), 5.0, 1500);

    // all runs: 4500 s / 10 km
    assert_eq!(
        StatsLogic::predict_performance(&pool, 10.0, None).unwrap(),
        Some(4500)
    );
    // only the most recent run
    assert_eq!(
        StatsLogic::predict_performance(&pool, 10.0, Some(1)).unwrap(),
        Some(3000)
    );
}

#[test]
fn test_predict_rounds_down() {
    let runs = vec![Run::new(ymd(2024, 3, 1), 3.0, 1000, None, None)];
    // 333.33.. s/km * 2 km = 666.66..
    assert_eq!(predict_from_runs(&runs, 2.0), Some(666));
}

#[test]
fn test_predict_zero_distance_is_none() {
    let runs = vec![Run::new(ymd(2024, 3, 1), 0.0, 1000, Some(5.0), None)];
    assert_eq!(predict_from_runs(&runs, 10.0), None);
    assert_eq!(predict_from_runs(&[], 10.0), None);
}

#[test]
fn test_best_efforts_pick_lowest_pace() {
    let pool = fresh_pool("stats_best_efforts");

    add_with_pace(&pool, ymd(2024, 3, 1), 5.0, 1500, 5.0);
    let fast = add_with_pace(&pool, ymd(2024, 3, 8), 5.0, 1440, 4.8);
    let half = add(&pool, ymd(2024, 4, 1), 21.1, 7200);
    add(&pool, ymd(2024, 4, 5), 7.0, 2100);

    let best = StatsLogic::best_efforts(&pool).unwrap();
    assert_eq!(best.len(), 2);
    assert_eq!(best.get(5.0).map(|r| r.id), Some(fast.id));
    assert_eq!(best.get(21.1).map(|r| r.id), Some(half.id));
    assert!(best.get(10.0).is_none());

    let order: Vec<f64> = best.iter().map(|(d, _)| d).collect();
    assert_eq!(order, vec![CANONICAL_DISTANCES[0], CANONICAL_DISTANCES[2]]);
}

#[test]
fn test_compare_runs_sign_convention() {
    let recent = run_with_pace(Some(5.0));
    let previous = run_with_pace(Some(4.0));

    assert_eq!(compare_runs(&recent, &previous), Some(25.0));
    assert_eq!(compare_runs(&previous, &recent), Some(-20.0));
}

#[test]
fn test_compare_runs_missing_pace() {
    let with = run_with_pace(Some(5.0));
    let without = run_with_pace(None);

    assert_eq!(compare_runs(&with, &without), None);
    assert_eq!(compare_runs(&without, &with), None);
}

#[test]
fn test_last_two_most_recent_first() {
    let pool = fresh_pool("stats_last_two");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    assert_eq!(StatsLogic::last_two(&pool).unwrap().len(), 1);

    add(&pool, ymd(2024, 3, 5), 5.0, 1400);
    add(&pool, ymd(2024, 3, 3), 5.0, 1450);

    let two = StatsLogic::last_two(&pool).unwrap();
    assert_eq!(two[0].date, ymd(2024, 3, 5));
    assert_eq!(two[1].date, ymd(2024, 3, 3));
}

#[test]
fn test_cumulative_progress_same_date_shares_total() {
    let pool = fresh_pool("stats_cumulative");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    add(&pool, ymd(2024, 3, 2), 3.0, 900);
    add(&pool, ymd(2024, 3, 2), 2.0, 600);
    add(&pool, ymd(2024, 3, 4), 10.0, 3000);

    let points = StatsLogic::cumulative_progress(&pool).unwrap();
    assert_eq!(points.len(), 4);

    assert_eq!(points[0].cumulative_distance, 5.0);
    assert_eq!(points[1].cumulative_distance, 10.0);
    assert_eq!(points[2].cumulative_distance, 10.0);
    assert_eq!(points[2].cumulative_time, 3000);
    assert_eq!(points[3].cumulative_distance, 20.0);
    assert_eq!(points[3].cumulative_time, 6000);
}

#[test]
fn test_report_totals_agree_with_average() {
    let pool = fresh_pool("stats_report_totals");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    add(&pool, ymd(2024, 3, 2), 4.0, 1500);

    let report = runlog::core::report::RunReport::build(&pool, false).unwrap();
    assert_eq!(report.run_count, 2);
    assert_eq!(report.total_distance, 9.0);
    assert_eq!(report.total_time, 3000);
    assert_eq!(
        report.average_pace,
        runlog::core::stats::pace_from_totals(9.0, 3000)
    );
    assert!(report.runs.is_empty());
}
