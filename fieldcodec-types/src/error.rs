//! Error types for type descriptor validation.

use thiserror::Error;

/// Error type for malformed type descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Type name is empty or blank.
    #[error("type name must not be empty")]
    EmptyName,

    /// A type kind that cannot declare constructors carries some.
    #[error("{kind} type '{name}' cannot declare constructors")]
    UnexpectedConstructors {
        /// Type kind.
        kind: String,
        /// Type name.
        name: String,
    },
}
