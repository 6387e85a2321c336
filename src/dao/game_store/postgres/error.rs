//! Error types shared by the PostgreSQL storage implementation.

use thiserror::Error;

/// Convenient result alias returning [`PgDaoError`] failures.
pub type PgResult<T> = Result<T, PgDaoError>;

/// Failures that can occur while interacting with PostgreSQL.
#[derive(Debug, Error)]
pub enum PgDaoError {
    /// The connection pool could not be established.
    #[error("failed to connect to PostgreSQL")]
    Connect {
        /// Driver-level cause.
        #[source]
        source: sqlx::Error,
    },
    /// The `games` table could not be created on startup.
    #[error("failed to ensure the games schema")]
    Schema {
        /// Driver-level cause.
        #[source]
        source: sqlx::Error,
    },
    /// A query against the games table failed.
    #[error("games query `{operation}` failed")]
    Query {
        /// Short label of the failed operation.
        operation: &'static str,
        /// Driver-level cause.
        #[source]
        source: sqlx::Error,
    },
}

impl PgDaoError {
    pub(super) fn query(operation: &'static str, source: sqlx::Error) -> Self {
        PgDaoError::Query { operation, source }
    }
}
