use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::delete_run;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete run `id`. Returns `false` when there was nothing to delete.
    pub fn apply(pool: &DbPool, id: i64) -> AppResult<bool> {
        let deleted = delete_run(pool, id)?;

        if deleted {
            audit(pool, "delete", &id.to_string(), "Run deleted");
        }

        Ok(deleted)
    }
}
