use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Create the `runs` and `log` tables if they are missing.
pub fn init_db(pool: &DbPool) -> AppResult<()> {
    pool.with_conn(|conn| {
        Ok(conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS runs (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                date     TEXT NOT NULL,
                distance REAL NOT NULL,
                time     INTEGER NOT NULL,
                pace     REAL,
                notes    TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_runs_date ON runs(date);

            CREATE TABLE IF NOT EXISTS log (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                date      TEXT NOT NULL,
                operation TEXT NOT NULL,
                target    TEXT DEFAULT '',
                message   TEXT NOT NULL
            );
            "#,
        )?)
    })
}
