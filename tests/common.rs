#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use runlog::core::add::AddLogic;
use runlog::db::initialize::init_db;
use runlog::db::pool::DbPool;
use runlog::models::run::Run;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rl() -> Command {
    cargo_bin_cmd!("runlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_runlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_runlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, initialized store for library-level tests
pub fn fresh_pool(name: &str) -> DbPool {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path);
    init_db(&pool).expect("init db");
    pool
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Store a run with derived pace
pub fn add(pool: &DbPool, date: NaiveDate, distance: f64, seconds: i64) -> Run {
    AddLogic::apply(pool, date, distance, seconds, None, None).expect("add run")
}

/// Store a run with an explicit pace
pub fn add_with_pace(pool: &DbPool, date: NaiveDate, distance: f64, seconds: i64, pace: f64) -> Run {
    AddLogic::apply(pool, date, distance, seconds, Some(pace), None).expect("add run")
}

/// Initialize DB through the CLI and log a small dataset
pub fn init_db_with_data(db_path: &str) {
    rl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, distance, time) in [
        ("2024-03-01", "5", "25:00"),
        ("2024-03-10", "10", "52:30"),
        ("2024-04-02", "5", "24:00"),
    ] {
        rl()
            .args([
                "--db",
                db_path,
                "log",
                "--date",
                date,
                "--distance",
                distance,
                "--time",
                time,
            ])
            .assert()
            .success();
    }
}
