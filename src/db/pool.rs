//! SQLite store handle (lightweight for CLI usage).
//!
//! The handle only remembers where the database lives. Every logical
//! operation acquires its own connection through [`DbPool::with_conn`] and
//! the connection is closed when the closure returns, on success or error.

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DbPool {
    path: PathBuf,
}

impl DbPool {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection, run `func` on it and release it.
    ///
    /// Each call is its own auto-committing unit of work.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = Connection::open(&self.path)?;
        func(&conn)
    }
}
