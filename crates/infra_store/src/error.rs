//! SQLx error mapping
//!
//! Collapses driver errors into the shared `PortError` so the services
//! never see sqlx types. Timeouts and connection losses keep their
//! transient classification.

use core_kernel::PortError;

/// Maps a sqlx error for the named operation into a `PortError`
pub(crate) fn into_port_error(operation: &str, err: sqlx::Error) -> PortError {
    match err {
        sqlx::Error::PoolTimedOut => PortError::Timeout {
            operation: operation.to_string(),
            duration_ms: 0,
        },
        sqlx::Error::Io(e) => PortError::connection(e.to_string()),
        sqlx::Error::PoolClosed => PortError::connection("connection pool closed"),
        sqlx::Error::Database(db_err) => PortError::internal(db_err.message().to_string()),
        other => PortError::internal(other.to_string()),
    }
}
