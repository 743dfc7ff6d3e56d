//! Prelude module for convenient imports.
//!
//! ```
//! use fieldcodec::prelude::*;
//! ```

pub use fieldcodec_codegen::{
    ChainBuilder, CodeFragment, CodegenError, DateTimeHelper, Direction, FieldResolver, FnHelper,
    HandlerChain, HandlerOutcome, JsonHelper, Resolution, ResolverConfig, TypeHelper,
    UnsupportedPolicy,
};
pub use fieldcodec_types::{
    ConstructorDef, ParameterDef, TypeChecker, TypeDescriptor, TypeKind, well_known,
};
