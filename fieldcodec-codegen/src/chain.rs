//! Ordered, first-match-wins chain of type helpers.

use crate::error::CodegenError;
use crate::fragment::{CodeFragment, Direction, HandlerOutcome};
use crate::helper::TypeHelper;
use crate::helpers::{DateTimeHelper, JsonHelper};
use fieldcodec_types::TypeDescriptor;
use std::sync::Arc;

/// Outcome of resolving one request against a whole chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A helper accepted the request.
    Accepted {
        /// Expression produced by the helper.
        fragment: CodeFragment,
        /// Position of the accepting helper in the chain.
        helper_index: usize,
    },
    /// Every helper declined.
    Unsupported,
}

impl Resolution {
    /// Returns true if a helper accepted the request.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the fragment, if accepted.
    #[must_use]
    pub fn fragment(&self) -> Option<&CodeFragment> {
        match self {
            Self::Accepted { fragment, .. } => Some(fragment),
            Self::Unsupported => None,
        }
    }

    /// Consumes the resolution, returning the fragment if accepted.
    #[must_use]
    pub fn into_fragment(self) -> Option<CodeFragment> {
        match self {
            Self::Accepted { fragment, .. } => Some(fragment),
            Self::Unsupported => None,
        }
    }
}

/// Immutable ordered list of helpers.
///
/// Earlier helpers take precedence; order is the only tie-break. The chain
/// holds no mutable state and may be shared across threads.
#[derive(Clone, Default)]
pub struct HandlerChain {
    helpers: Vec<Arc<dyn TypeHelper>>,
}

impl HandlerChain {
    /// Creates a chain from helpers in precedence order.
    #[must_use]
    pub fn new(helpers: Vec<Arc<dyn TypeHelper>>) -> Self {
        Self { helpers }
    }

    /// Creates the built-in chain: JSON delegates, then date-times.
    #[must_use]
    pub fn default_chain() -> Self {
        ChainBuilder::new().with_defaults().build()
    }

    /// Returns the number of helpers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Returns true if the chain has no helpers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    /// Returns helper names in precedence order.
    #[must_use]
    pub fn helper_names(&self) -> Vec<&str> {
        self.helpers.iter().map(|h| h.name()).collect()
    }

    /// Resolves a request to the first accepted fragment.
    ///
    /// Helpers after the first acceptance are not consulted.
    ///
    /// # Arguments
    /// * `target_type` - Static type of the field
    /// * `direction` - Operation to request from each helper
    /// * `expression` - Source expression to wrap
    ///
    /// # Errors
    /// Returns `CodegenError` if the descriptor is malformed or the
    /// expression is blank. A chain where every helper declines is not an
    /// error; it yields [`Resolution::Unsupported`].
    pub fn resolve(
        &self,
        target_type: &TypeDescriptor,
        direction: Direction,
        expression: &str,
    ) -> Result<Resolution, CodegenError> {
        target_type.validate()?;
        if expression.trim().is_empty() {
            return Err(CodegenError::contract(format!(
                "empty source expression for type '{}'",
                target_type.qualified_name()
            )));
        }

        for (helper_index, helper) in self.helpers.iter().enumerate() {
            if let HandlerOutcome::Accepted(fragment) =
                helper.apply(direction, target_type, expression)
            {
                return Ok(Resolution::Accepted {
                    fragment,
                    helper_index,
                });
            }
        }
        Ok(Resolution::Unsupported)
    }

    /// Shorthand for [`resolve`](Self::resolve) with [`Direction::Serialize`].
    ///
    /// # Errors
    /// Same as [`resolve`](Self::resolve).
    pub fn serialize(
        &self,
        target_type: &TypeDescriptor,
        expression: &str,
    ) -> Result<Resolution, CodegenError> {
        self.resolve(target_type, Direction::Serialize, expression)
    }

    /// Shorthand for [`resolve`](Self::resolve) with [`Direction::Deserialize`].
    ///
    /// # Errors
    /// Same as [`resolve`](Self::resolve).
    pub fn deserialize(
        &self,
        target_type: &TypeDescriptor,
        expression: &str,
    ) -> Result<Resolution, CodegenError> {
        self.resolve(target_type, Direction::Deserialize, expression)
    }
}

impl std::fmt::Debug for HandlerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerChain")
            .field("helpers", &self.helper_names())
            .finish()
    }
}

/// Builder for assembling a chain, most specific helper first.
#[derive(Default)]
pub struct ChainBuilder {
    helpers: Vec<Arc<dyn TypeHelper>>,
}

impl ChainBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a helper after those already added.
    #[must_use]
    pub fn helper<H: TypeHelper + 'static>(mut self, helper: H) -> Self {
        self.helpers.push(Arc::new(helper));
        self
    }

    /// Appends an already shared helper.
    #[must_use]
    pub fn helper_arc(mut self, helper: Arc<dyn TypeHelper>) -> Self {
        self.helpers.push(helper);
        self
    }

    /// Appends the built-in helpers: [`JsonHelper`], then [`DateTimeHelper`].
    #[must_use]
    pub fn with_defaults(self) -> Self {
        self.helper(JsonHelper::new()).helper(DateTimeHelper::new())
    }

    /// Builds the immutable chain.
    #[must_use]
    pub fn build(self) -> HandlerChain {
        let chain = HandlerChain::new(self.helpers);
        tracing::debug!("Built handler chain: {:?}", chain.helper_names());
        chain
    }
}
