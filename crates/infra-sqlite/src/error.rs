// sqlx::Error -> RepositoryError mapping

use auction_closer_core::port::RepositoryError;

/// Convert sqlx::Error to RepositoryError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => RepositoryError::Database(format!(
                        "Unique constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    "5" => RepositoryError::Unavailable(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "13" => RepositoryError::Database(format!(
                        "Database full: {}",
                        db_err.message()
                    )),
                    _ => RepositoryError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                RepositoryError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => RepositoryError::NotFound("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            RepositoryError::Corrupt(format!("Column not found: {}", col))
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Unavailable(err.to_string())
        }
        // Protocol, decode, configuration errors
        _ => RepositoryError::Database(err.to_string()),
    }
}
