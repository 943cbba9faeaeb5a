//! Errors reported by the operations.

use thiserror::Error;

use crate::Value;

/// Failure of a single operation call.
///
/// Every error is returned to the immediate caller; nothing is retried or
/// recovered inside the library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    #[error("{op}: invalid argument: {reason}")]
    InvalidArgument { op: &'static str, reason: String },
    #[error("{op}: expected {expected}, found {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("unknown operation {group}.{name}")]
    UnknownOperation { group: String, name: String },
}

impl OpError {
    #[must_use]
    pub fn invalid_argument(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// Type mismatch between what `op` needs and the value it was handed.
    #[must_use]
    pub fn type_mismatch(op: &'static str, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            op,
            expected,
            found: found.type_name(),
        }
    }

    #[must_use]
    pub fn unknown_operation(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownOperation {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Name of the operation that failed, if known.
    #[must_use]
    pub fn op(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { op, .. } | Self::TypeMismatch { op, .. } => Some(*op),
            Self::UnknownOperation { .. } => None,
        }
    }
}
