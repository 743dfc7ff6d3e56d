//! Descriptors for well-known core library types.

use crate::descriptor::TypeDescriptor;

/// Library that declares the core types.
pub const CORE_LIBRARY: &str = "dart:core";

/// Short name of the core date-time type.
pub const DATE_TIME: &str = "DateTime";

/// Returns the core `DateTime` type.
#[must_use]
pub fn date_time() -> TypeDescriptor {
    TypeDescriptor::primitive(DATE_TIME)
        .in_library(CORE_LIBRARY)
        .with_supertype(object())
}

/// Returns the core `String` type.
#[must_use]
pub fn string() -> TypeDescriptor {
    TypeDescriptor::primitive("String")
        .in_library(CORE_LIBRARY)
        .with_supertype(object())
}

/// Returns the core `int` type.
#[must_use]
pub fn int() -> TypeDescriptor {
    TypeDescriptor::primitive("int")
        .in_library(CORE_LIBRARY)
        .with_supertype(object())
}

/// Returns the core `Object` type.
#[must_use]
pub fn object() -> TypeDescriptor {
    TypeDescriptor::named("Object").in_library(CORE_LIBRARY)
}

/// Returns the untyped `dynamic` type.
#[must_use]
pub fn dynamic() -> TypeDescriptor {
    TypeDescriptor::new(crate::descriptor::TypeKind::Dynamic, "dynamic")
}
