//! Type predicates used by type helpers to decide applicability.

use crate::descriptor::{ConstructorDef, TypeDescriptor, TypeKind};

/// Matches descriptors against one fixed type.
///
/// The checker captures only the identity of the target (kind, library,
/// name), so it is cheap to clone and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChecker {
    kind: TypeKind,
    library: Option<String>,
    name: String,
}

impl TypeChecker {
    /// Creates a checker for a named type in the given library.
    #[must_use]
    pub fn exact(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Named,
            library: Some(library.into()),
            name: name.into(),
        }
    }

    /// Creates a checker for the identity of an existing descriptor.
    #[must_use]
    pub fn from_type(ty: &TypeDescriptor) -> Self {
        Self {
            kind: ty.kind,
            library: ty.library.clone(),
            name: ty.name.clone(),
        }
    }

    /// Returns the short name of the checked type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the library of the checked type.
    #[must_use]
    pub fn library(&self) -> Option<&str> {
        self.library.as_deref()
    }

    /// Returns true if `ty` is exactly the checked type. Subtypes and
    /// parameterized forms never match.
    #[must_use]
    pub fn is_exactly(&self, ty: &TypeDescriptor) -> bool {
        self.matches_identity(ty) && !ty.is_parameterized()
    }

    /// Returns true if `ty` is the checked type or has it in its supertype
    /// chain.
    #[must_use]
    pub fn is_assignable_from(&self, ty: &TypeDescriptor) -> bool {
        self.is_exactly(ty) || ty.supertypes().any(|t| self.is_exactly(t))
    }

    // Kind is compared loosely for named/primitive so that a checker built
    // with `exact` still recognises core value types.
    fn matches_identity(&self, ty: &TypeDescriptor) -> bool {
        let kind_matches = match (self.kind, ty.kind) {
            (TypeKind::Named | TypeKind::Primitive, TypeKind::Named | TypeKind::Primitive) => true,
            (a, b) => a == b,
        };
        kind_matches && self.library == ty.library && self.name == ty.name
    }
}

/// Returns true if `ty` is a named (class/interface) type.
#[must_use]
pub fn is_interface(ty: &TypeDescriptor) -> bool {
    ty.kind == TypeKind::Named
}

/// Returns true if `ty` has the given short name, regardless of library.
#[must_use]
pub fn is_named(ty: &TypeDescriptor, name: &str) -> bool {
    ty.name == name
}

/// Finds a constructor by name on a named type. Always `None` for kinds
/// that cannot declare members.
#[must_use]
pub fn find_constructor<'a>(ty: &'a TypeDescriptor, name: &str) -> Option<&'a ConstructorDef> {
    if !is_interface(ty) {
        return None;
    }
    ty.get_constructor(name)
}
