//! # fieldcodec
//!
//! Pluggable resolution of JSON serialization code for declared field types.
//!
//! Given a static type description and a source expression, fieldcodec asks
//! an ordered chain of type helpers for the expression that encodes the
//! value to JSON, or decodes it back. The first helper that accepts wins;
//! when every helper declines the caller decides whether that is fatal.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcodec::prelude::*;
//!
//! let chain = HandlerChain::default_chain();
//! let resolution = chain
//!     .resolve(&well_known::date_time(), Direction::Serialize, "createdAt")
//!     .unwrap();
//! assert_eq!(
//!     resolution.fragment().map(|f| f.as_str()),
//!     Some("createdAt?.toIso8601String()")
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`types`] - Type descriptors and type predicates
//! - [`codegen`] - Type helpers, the handler chain and field resolution

pub mod prelude;

/// Type descriptors and type predicates.
pub mod types {
    pub use fieldcodec_types::*;
}

/// Type helpers, the handler chain and field resolution.
pub mod codegen {
    pub use fieldcodec_codegen::*;
}

pub use fieldcodec_codegen::{
    ChainBuilder, CodeFragment, CodegenError, Direction, FieldResolver, HandlerChain,
    HandlerOutcome, Resolution, ResolverConfig, TypeHelper, UnsupportedPolicy,
};
pub use fieldcodec_types::{TypeDescriptor, TypeKind};
