use runlog::core::del::DeleteLogic;
use runlog::core::edit::{EditLogic, RunChanges};
use runlog::db::log::load_log;
use runlog::db::queries::{
    all_runs, count_runs, date_bounds, delete_run, fastest_for_distance, get_run, insert_run,
    last_n_runs, monthly_totals, runs_in_range, update_run,
};
use runlog::models::run::Run;
use runlog::errors::AppError;

mod common;
use common::{add, add_with_pace, fresh_pool, ymd};

#[test]
fn test_insert_and_get_run() {
    let pool = fresh_pool("store_insert_get");

    let run = add(&pool, ymd(2024, 3, 5), 5.0, 1500);
    assert!(run.id > 0);
    assert_eq!(run.pace, Some(5.0));

    let stored = get_run(&pool, run.id).unwrap().expect("run stored");
    assert_eq!(stored, run);
    assert_eq!(stored.notes, None);
}

#[test]
fn test_get_missing_run_is_none() {
    let pool = fresh_pool("store_get_missing");
    assert!(get_run(&pool, 42).unwrap().is_none());
}

#[test]
fn test_empty_notes_are_stored_as_null() {
    let pool = fresh_pool("store_empty_notes");

    let run = runlog::core::add::AddLogic::apply(
        &pool,
        ymd(2024, 3, 5),
        5.0,
        1500,
        None,
        Some("   ".into()),
    )
    .unwrap();

    assert_eq!(get_run(&pool, run.id).unwrap().unwrap().notes, None);
}

#[test]
fn test_zero_distance_without_pace_is_rejected() {
    let pool = fresh_pool("store_zero_distance");

    let res = runlog::core::add::AddLogic::apply(&pool, ymd(2024, 3, 5), 0.0, 600, None, None);
    assert!(matches!(res, Err(AppError::InvalidDistance(_))));
    assert_eq!(count_runs(&pool).unwrap(), 0);
}

#[test]
fn test_zero_distance_with_explicit_pace_is_stored() {
    let pool = fresh_pool("store_zero_distance_pace");

    let run = add_with_pace(&pool, ymd(2024, 3, 5), 0.0, 600, 6.0);
    assert_eq!(get_run(&pool, run.id).unwrap().unwrap().pace, Some(6.0));
}

#[test]
fn test_last_n_orders_by_date_not_insertion() {
    let pool = fresh_pool("store_last_n");

    add(&pool, ymd(2024, 1, 1), 5.0, 1500);
    add(&pool, ymd(2024, 1, 3), 5.0, 1500);
    add(&pool, ymd(2024, 1, 2), 5.0, 1500);

    let last = last_n_runs(&pool, 2).unwrap();
    let dates: Vec<_> = last.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![ymd(2024, 1, 3), ymd(2024, 1, 2)]);
}

#[test]
fn test_last_n_same_day_newest_id_first() {
    let pool = fresh_pool("store_last_n_same_day");

    let first = add(&pool, ymd(2024, 1, 1), 5.0, 1500);
    let second = add(&pool, ymd(2024, 1, 1), 8.0, 2400);

    let last = last_n_runs(&pool, 2).unwrap();
    assert_eq!(last[0].id, second.id);
    assert_eq!(last[1].id, first.id);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let pool = fresh_pool("store_range_inclusive");

    add(&pool, ymd(2024, 2, 28), 5.0, 1500);
    add(&pool, ymd(2024, 3, 1), 6.0, 1800);
    add(&pool, ymd(2024, 3, 15), 7.0, 2100);
    add(&pool, ymd(2024, 3, 31), 8.0, 2400);
    add(&pool, ymd(2024, 4, 1), 9.0, 2700);

    let march = runs_in_range(&pool, &ymd(2024, 3, 1), &ymd(2024, 3, 31)).unwrap();
    assert_eq!(march.len(), 3);
    assert_eq!(march[0].date, ymd(2024, 3, 31));
    assert_eq!(march[2].date, ymd(2024, 3, 1));

    let single = runs_in_range(&pool, &ymd(2024, 3, 15), &ymd(2024, 3, 15)).unwrap();
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].distance, 7.0);
}

#[test]
fn test_empty_range_returns_empty_list() {
    let pool = fresh_pool("store_range_empty");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);

    let none = runs_in_range(&pool, &ymd(2023, 1, 1), &ymd(2023, 12, 31)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_monthly_totals_group_by_month() {
    let pool = fresh_pool("store_monthly");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    add(&pool, ymd(2024, 3, 20), 10.0, 3000);
    add(&pool, ymd(2024, 4, 2), 7.5, 2250);

    let months = monthly_totals(&pool).unwrap();
    assert_eq!(months.len(), 2);

    assert_eq!(months[0].month, "2024-04");
    assert_eq!(months[0].total_distance, 7.5);
    assert_eq!(months[0].total_time, 2250);

    assert_eq!(months[1].month, "2024-03");
    assert_eq!(months[1].total_distance, 15.0);
    assert_eq!(months[1].total_time, 4500);
}

#[test]
fn test_fastest_for_distance_exact_match_only() {
    let pool = fresh_pool("store_fastest");

    add_with_pace(&pool, ymd(2024, 3, 1), 5.0, 1500, 5.0);
    let best = add_with_pace(&pool, ymd(2024, 3, 2), 5.0, 1440, 4.8);
    add_with_pace(&pool, ymd(2024, 3, 3), 5.01, 1200, 4.0);

    let fastest = fastest_for_distance(&pool, 5.0).unwrap().unwrap();
    assert_eq!(fastest.id, best.id);

    assert!(fastest_for_distance(&pool, 10.0).unwrap().is_none());
}

#[test]
fn test_delete_missing_id_is_noop() {
    let pool = fresh_pool("store_delete_missing");

    add(&pool, ymd(2024, 3, 1), 5.0, 1500);

    assert!(!delete_run(&pool, 999).unwrap());
    assert!(!DeleteLogic::apply(&pool, 999).unwrap());
    assert_eq!(count_runs(&pool).unwrap(), 1);
}

#[test]
fn test_delete_existing_run() {
    let pool = fresh_pool("store_delete_existing");

    let run = add(&pool, ymd(2024, 3, 1), 5.0, 1500);

    assert!(DeleteLogic::apply(&pool, run.id).unwrap());
    assert!(get_run(&pool, run.id).unwrap().is_none());
    assert!(all_runs(&pool).unwrap().is_empty());
}

#[test]
fn test_edit_keeps_stored_pace_unless_asked() {
    let pool = fresh_pool("store_edit_pace");

    let run = add(&pool, ymd(2024, 3, 1), 5.0, 1500);

    let edited = EditLogic::apply(
        &pool,
        run.id,
        RunChanges {
            distance: Some(10.0),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(edited.distance, 10.0);
    assert_eq!(edited.pace, Some(5.0));

    let recalculated = EditLogic::apply(
        &pool,
        run.id,
        RunChanges {
            recalc_pace: true,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(recalculated.pace, Some(2.5));

    let stored = get_run(&pool, run.id).unwrap().unwrap();
    assert_eq!(stored, recalculated);
}

#[test]
fn test_edit_clears_notes_with_empty_string() {
    let pool = fresh_pool("store_edit_notes");

    let run = runlog::core::add::AddLogic::apply(
        &pool,
        ymd(2024, 3, 1),
        5.0,
        1500,
        None,
        Some("easy".into()),
    )
    .unwrap();

    let edited = EditLogic::apply(
        &pool,
        run.id,
        RunChanges {
            notes: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(edited.notes, None);
}

#[test]
fn test_edit_missing_run_errors() {
    let pool = fresh_pool("store_edit_missing");

    let res = EditLogic::apply(&pool, 7, RunChanges::default());
    assert!(matches!(res, Err(AppError::RunNotFound(7))));
}

#[test]
fn test_date_bounds() {
    let pool = fresh_pool("store_date_bounds");
    assert!(date_bounds(&pool).unwrap().is_none());

    add(&pool, ymd(2024, 5, 1), 5.0, 1500);
    add(&pool, ymd(2024, 1, 1), 5.0, 1500);

    assert_eq!(
        date_bounds(&pool).unwrap(),
        Some((ymd(2024, 1, 1), ymd(2024, 5, 1)))
    );
}

#[test]
fn test_writes_are_audited() {
    let pool = fresh_pool("store_audit");

    let run = add(&pool, ymd(2024, 3, 1), 5.0, 1500);
    DeleteLogic::apply(&pool, run.id).unwrap();

    let ops: Vec<String> = load_log(&pool)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["log".to_string(), "delete".to_string()]);
}

#[test]
fn test_update_missing_id_returns_false() {
    let pool = fresh_pool("store_update_missing");

    let run = Run::new(ymd(2024, 3, 1), 5.0, 1500, None, None);
    assert!(!update_run(&pool, 999, &run).unwrap());
    assert_eq!(count_runs(&pool).unwrap(), 0);
}

#[test]
fn test_update_replaces_every_field() {
    let pool = fresh_pool("store_update_all_fields");

    let original = Run::new(ymd(2024, 3, 1), 5.0, 1500, Some(5.0), Some("tempo".into()));
    let id = insert_run(&pool, &original).unwrap();

    let replacement = Run {
        id,
        date: ymd(2024, 3, 9),
        distance: 8.0,
        duration: 2700,
        pace: None,
        notes: None,
    };
    assert!(update_run(&pool, id, &replacement).unwrap());

    let stored = get_run(&pool, id).unwrap().expect("run still stored");
    assert_eq!(stored, replacement);
    assert_eq!(stored.pace, None);
    assert_eq!(stored.notes, None);
}

#[test]
fn test_fastest_prefers_paced_run_over_null_pace() {
    let pool = fresh_pool("store_fastest_null_pace");

    let unpaced = Run {
        id: 0,
        date: ymd(2024, 3, 1),
        distance: 5.0,
        duration: 1500,
        pace: None,
        notes: None,
    };
    insert_run(&pool, &unpaced).unwrap();
    let paced = add_with_pace(&pool, ymd(2024, 3, 2), 5.0, 1500, 5.0);

    let fastest = fastest_for_distance(&pool, 5.0).unwrap().unwrap();
    assert_eq!(fastest.id, paced.id);
    assert_eq!(fastest.pace, Some(5.0));

    delete_run(&pool, paced.id).unwrap();
    let only_unpaced = fastest_for_distance(&pool, 5.0).unwrap().unwrap();
    assert_eq!(only_unpaced.pace, None);
}
