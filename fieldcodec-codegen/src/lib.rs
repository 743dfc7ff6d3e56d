//! # fieldcodec Codegen
//!
//! Resolves the code fragments that serialize a field value to JSON and
//! deserialize it back.
//!
//! This crate provides:
//! - The [`TypeHelper`] contract: two independent, declinable operations
//! - Built-in helpers for `fromJson` delegates and ISO-8601 date-times
//! - An ordered, first-match-wins [`HandlerChain`]
//! - A [`FieldResolver`] that applies a caller policy to unsupported types

pub mod chain;
pub mod error;
pub mod field;
pub mod fragment;
pub mod helper;
pub mod helpers;
pub mod iso8601;

pub use chain::{ChainBuilder, HandlerChain, Resolution};
pub use error::CodegenError;
pub use field::{FieldResolver, ResolverConfig, UnsupportedPolicy};
pub use fragment::{CodeFragment, Direction, HandlerOutcome};
pub use helper::{FnHelper, TypeHelper};
pub use helpers::{DateTimeHelper, JsonHelper};

/// Resolves one field-type/direction pair against the default chain.
///
/// # Errors
/// Returns `CodegenError::ContractViolation` if the descriptor or the
/// expression is malformed.
pub fn resolve_default(
    ty: &fieldcodec_types::TypeDescriptor,
    direction: Direction,
    expression: &str,
) -> Result<Resolution, CodegenError> {
    HandlerChain::default_chain().resolve(ty, direction, expression)
}
