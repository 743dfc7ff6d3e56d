//! Caller-side resolution of fields with a policy for unsupported types.
//!
//! [`HandlerChain`] only reports; whether an unsupported field aborts code
//! generation or is skipped is decided here, by the emitter's configuration.

use crate::chain::{HandlerChain, Resolution};
use crate::error::CodegenError;
use crate::fragment::{CodeFragment, Direction};
use fieldcodec_types::TypeDescriptor;
use serde::{Deserialize, Serialize};

/// What to do with a field no helper can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Abort with [`CodegenError::Unsupported`].
    #[default]
    Error,
    /// Log a warning and leave the field unhandled.
    Skip,
}

/// Resolver configuration supplied by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Policy for unsupported field types.
    pub unsupported: UnsupportedPolicy,
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unsupported-type policy.
    #[must_use]
    pub fn unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }
}

/// Resolves fields against a chain, applying a [`ResolverConfig`].
#[derive(Debug, Clone)]
pub struct FieldResolver<'a> {
    chain: &'a HandlerChain,
    config: ResolverConfig,
}

impl<'a> FieldResolver<'a> {
    /// Creates a new field resolver.
    #[must_use]
    pub fn new(chain: &'a HandlerChain, config: ResolverConfig) -> Self {
        Self { chain, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves the code for one field.
    ///
    /// # Arguments
    /// * `field` - Field name, used in diagnostics only
    /// * `target_type` - Declared type of the field
    /// * `direction` - Serialize or deserialize
    /// * `expression` - Source expression to wrap
    ///
    /// # Returns
    /// `Some(fragment)` when a helper accepted, `None` when the field is
    /// unsupported and the policy is [`UnsupportedPolicy::Skip`].
    ///
    /// # Errors
    /// Returns `CodegenError` on contract violations, or
    /// `CodegenError::Unsupported` under [`UnsupportedPolicy::Error`].
    pub fn resolve_field(
        &self,
        field: &str,
        target_type: &TypeDescriptor,
        direction: Direction,
        expression: &str,
    ) -> Result<Option<CodeFragment>, CodegenError> {
        match self.chain.resolve(target_type, direction, expression)? {
            Resolution::Accepted { fragment, .. } => Ok(Some(fragment)),
            Resolution::Unsupported => match self.config.unsupported {
                UnsupportedPolicy::Error => Err(CodegenError::Unsupported {
                    field: field.to_string(),
                    type_name: target_type.qualified_name(),
                    direction,
                }),
                UnsupportedPolicy::Skip => {
                    tracing::warn!(
                        "Skipping field '{}': no helper can {} type '{}'",
                        field,
                        direction,
                        target_type.qualified_name()
                    );
                    Ok(None)
                }
            },
        }
    }
}
