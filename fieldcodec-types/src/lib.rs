//! # fieldcodec Types
//!
//! Static type descriptors and type predicates.
//!
//! This crate provides:
//! - Type descriptors handed over by the type-introspection front end
//! - Constructor and parameter signatures for named types
//! - Exact-type and named-type predicates used by type helpers
//! - Descriptors for well-known core types

pub mod checker;
pub mod descriptor;
pub mod error;
pub mod well_known;

pub use checker::TypeChecker;
pub use descriptor::{ConstructorDef, ParameterDef, TypeDescriptor, TypeKind};
pub use error::TypeError;
