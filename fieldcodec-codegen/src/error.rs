//! Error types for code fragment resolution.

use crate::fragment::Direction;
use thiserror::Error;

/// Error type for resolution operations.
///
/// A helper declining a type is never an error; only malformed input and
/// caller-escalated unsupported types surface here.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Malformed type descriptor.
    #[error("invalid type descriptor: {0}")]
    Type(#[from] fieldcodec_types::TypeError),

    /// Input that breaks the resolver contract.
    #[error("contract violation: {message}")]
    ContractViolation {
        /// Error message.
        message: String,
    },

    /// Timestamp that is not in the ISO-8601 wire format.
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// Offending text.
        value: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No helper in the chain covers the field type.
    #[error("no helper can {direction} field '{field}' of type '{type_name}'")]
    Unsupported {
        /// Field name.
        field: String,
        /// Qualified type name.
        type_name: String,
        /// Requested direction.
        direction: Direction,
    },
}

impl CodegenError {
    /// Creates a contract violation error with the given message.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
