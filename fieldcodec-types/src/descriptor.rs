//! Type descriptor definitions.
//!
//! A [`TypeDescriptor`] is the read-only view of a declared type that the
//! introspection front end hands to type helpers. It carries just enough
//! structure to decide applicability: kind, name, library, type arguments,
//! the supertype chain and, for named types, the declared constructors.

use crate::error::TypeError;
use std::fmt;

/// Structural kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// Built-in value type (`int`, `bool`, `DateTime`, ...).
    Primitive,
    /// Named class or interface type.
    #[default]
    Named,
    /// Unresolved type parameter such as `T`.
    Generic,
    /// Untyped top type.
    Dynamic,
}

impl TypeKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Named => "named",
            Self::Generic => "generic",
            Self::Dynamic => "dynamic",
        }
    }

    /// Returns true if types of this kind may declare constructors.
    #[must_use]
    pub const fn has_members(&self) -> bool {
        matches!(self, Self::Named | Self::Primitive)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static type description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Structural kind.
    pub kind: TypeKind,
    /// Declaring library, if known.
    pub library: Option<String>,
    /// Short type name.
    pub name: String,
    /// Type arguments, in declaration order.
    pub type_arguments: Vec<TypeDescriptor>,
    /// Direct supertype.
    pub supertype: Option<Box<TypeDescriptor>>,
    /// Constructors and factories.
    pub constructors: Vec<ConstructorDef>,
}

impl TypeDescriptor {
    /// Creates a descriptor of the given kind with no members.
    #[must_use]
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            library: None,
            name: name.into(),
            type_arguments: Vec::new(),
            supertype: None,
            constructors: Vec::new(),
        }
    }

    /// Creates a named (class/interface) type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Named, name)
    }

    /// Creates a primitive type.
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Primitive, name)
    }

    /// Creates a type parameter.
    #[must_use]
    pub fn generic(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Generic, name)
    }

    /// Sets the declaring library.
    #[must_use]
    pub fn in_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Appends a type argument.
    #[must_use]
    pub fn with_type_argument(mut self, argument: TypeDescriptor) -> Self {
        self.type_arguments.push(argument);
        self
    }

    /// Sets the direct supertype.
    #[must_use]
    pub fn with_supertype(mut self, supertype: TypeDescriptor) -> Self {
        self.supertype = Some(Box::new(supertype));
        self
    }

    /// Appends a constructor or factory.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorDef) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Returns the library-qualified name (`library::Name`), or the bare
    /// name when the library is unknown.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.library {
            Some(library) => format!("{}::{}", library, self.name),
            None => self.name.clone(),
        }
    }

    /// Returns true if `other` denotes the same type.
    ///
    /// Kind, library, name and type arguments take part in identity;
    /// constructors and supertypes do not.
    #[must_use]
    pub fn is_exactly(&self, other: &TypeDescriptor) -> bool {
        self.kind == other.kind
            && self.library == other.library
            && self.name == other.name
            && self.type_arguments.len() == other.type_arguments.len()
            && self
                .type_arguments
                .iter()
                .zip(&other.type_arguments)
                .all(|(a, b)| a.is_exactly(b))
    }

    /// Returns true if this type has type arguments.
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        !self.type_arguments.is_empty()
    }

    /// Looks up a constructor by name.
    #[must_use]
    pub fn get_constructor(&self, name: &str) -> Option<&ConstructorDef> {
        self.constructors.iter().find(|c| c.name == name)
    }

    /// Returns true if a constructor with the given name exists.
    #[must_use]
    pub fn has_constructor(&self, name: &str) -> bool {
        self.get_constructor(name).is_some()
    }

    /// Iterates the supertype chain, nearest first. The type itself is not
    /// included.
    pub fn supertypes(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(self.supertype.as_deref(), |t| t.supertype.as_deref())
    }

    /// Checks that the descriptor is well formed.
    ///
    /// # Errors
    /// Returns `TypeError` for blank type names, or when a generic/dynamic
    /// type carries constructors. Constructor signatures are not checked.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.name.trim().is_empty() {
            return Err(TypeError::EmptyName);
        }
        if !self.kind.has_members() && !self.constructors.is_empty() {
            return Err(TypeError::UnexpectedConstructors {
                kind: self.kind.to_string(),
                name: self.name.clone(),
            });
        }
        for argument in &self.type_arguments {
            argument.validate()?;
        }
        if let Some(supertype) = &self.supertype {
            supertype.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some((first, rest)) = self.type_arguments.split_first() {
            write!(f, "<{}", first)?;
            for argument in rest {
                write!(f, ", {}", argument)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Constructor or factory signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorDef {
    /// Constructor name; empty for the unnamed constructor.
    pub name: String,
    /// Declared parameters.
    pub parameters: Vec<ParameterDef>,
}

impl ConstructorDef {
    /// Creates a constructor with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Creates the unnamed constructor.
    #[must_use]
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterDef) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Returns the number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Returns the number of required parameters.
    #[must_use]
    pub fn required_arity(&self) -> usize {
        self.parameters.iter().filter(|p| !p.optional).count()
    }

    /// Returns true for the unnamed constructor.
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

/// Constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDef {
    /// Parameter name.
    pub name: String,
    /// Declared type, as written; empty when untyped.
    pub type_name: String,
    /// Whether the parameter may be omitted.
    pub optional: bool,
}

impl ParameterDef {
    /// Creates a required parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
        }
    }

    /// Creates an optional parameter.
    #[must_use]
    pub fn optional(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::new(name, type_name)
        }
    }
}
