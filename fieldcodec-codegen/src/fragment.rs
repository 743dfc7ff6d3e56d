//! Direction, code fragment and helper outcome value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which helper operation a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Value to wire representation.
    Serialize,
    /// Wire representation to value.
    Deserialize,
}

impl Direction {
    /// Returns the other direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Serialize => Self::Deserialize,
            Self::Deserialize => Self::Serialize,
        }
    }

    /// Returns the lowercase name of the direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Serialize => "serialize",
            Self::Deserialize => "deserialize",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target-language expression text.
///
/// The text is spliced verbatim by the emitter; no structure beyond
/// "one expression" is implied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeFragment(String);

impl CodeFragment {
    /// Creates a fragment from expression text.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the expression text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the fragment, returning the expression text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the fragment has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CodeFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CodeFragment {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for CodeFragment {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

/// Result of asking one helper for one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// The helper covers the type and produced an expression.
    Accepted(CodeFragment),
    /// The helper does not cover the type for this direction.
    Declined,
}

impl HandlerOutcome {
    /// Creates an accepted outcome from expression text.
    #[must_use]
    pub fn accept(code: impl Into<String>) -> Self {
        Self::Accepted(CodeFragment::new(code))
    }

    /// Returns true if the outcome is accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Returns the fragment, if accepted.
    #[must_use]
    pub fn into_fragment(self) -> Option<CodeFragment> {
        match self {
            Self::Accepted(fragment) => Some(fragment),
            Self::Declined => None,
        }
    }

    /// Returns `self` if accepted, otherwise evaluates `f`.
    #[must_use]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Accepted(_) => self,
            Self::Declined => f(),
        }
    }
}

impl From<Option<CodeFragment>> for HandlerOutcome {
    fn from(fragment: Option<CodeFragment>) -> Self {
        fragment.map_or(Self::Declined, Self::Accepted)
    }
}
