use thiserror::Error;

/// Unified error type for database operations that application code can handle
#[derive(Error, Debug)]
pub enum DbError {
    /// The store could not be reached: pool timed out or closed, connection I/O or TLS failure
    #[error("Database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The database rejected or failed the statement
    #[error("Database query failed: {message}")]
    Query {
        /// SQLSTATE code, when the driver reports one
        code: Option<String>,
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// Catch-all for non-recoverable errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using sqlx's own error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => DbError::Unavailable(err),
            sqlx::Error::Database(ref db_err) => DbError::Query {
                code: db_err.code().map(|c| c.into_owned()),
                message: db_err.message().to_string(),
                source: err,
            },
            // All other sqlx errors are non-recoverable - convert to anyhow with context
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Type alias for database operation results
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_unavailable() {
        assert!(matches!(DbError::from(sqlx::Error::PoolTimedOut), DbError::Unavailable(_)));
        assert!(matches!(DbError::from(sqlx::Error::PoolClosed), DbError::Unavailable(_)));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = DbError::from(sqlx::Error::Io(io));
        assert!(matches!(err, DbError::Unavailable(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_row_not_found_is_not_a_client_error() {
        // Lookups use fetch_optional; a stray RowNotFound is a query bug, not a missing well
        assert!(matches!(DbError::from(sqlx::Error::RowNotFound), DbError::Other(_)));
    }

    #[test]
    fn test_other_errors_keep_description() {
        let err = DbError::from(sqlx::Error::ColumnNotFound("latitude".to_string()));
        assert!(matches!(err, DbError::Other(_)));
        assert!(err.to_string().contains("latitude"));
    }
}
