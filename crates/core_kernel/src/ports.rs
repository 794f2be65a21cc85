//! Shared collaborator ports
//!
//! The domain crates define their own storage ports; this module holds the
//! pieces every port implementation shares: the unified `PortError` type and
//! the audit sink capability used by both services.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::identifiers::{ClaimId, CoverId};

/// Error type for port operations
///
/// All adapter implementations map their failures into this type so the
/// services can treat infrastructure errors uniformly. Validation never
/// travels through here; it belongs to the domain error enums.
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// A stored record could not be decoded into its domain type
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        PortError::Decode {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::Timeout { .. }
        )
    }
}

/// HTTP verb recorded against an audited mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditVerb {
    Post,
    Delete,
}

impl AuditVerb {
    /// Wire form of the verb
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditVerb::Post => "POST",
            AuditVerb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for AuditVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit sink capability
///
/// Records which mutation happened to which entity. Auditing is observed,
/// not transactional: a persist that succeeds is not rolled back when the
/// subsequent audit write fails.
#[async_trait]
pub trait Auditer: Send + Sync {
    async fn audit_cover(&self, id: CoverId, verb: AuditVerb) -> Result<(), PortError>;
    async fn audit_claim(&self, id: ClaimId, verb: AuditVerb) -> Result<(), PortError>;
}
