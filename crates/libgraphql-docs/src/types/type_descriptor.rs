use crate::type_name_formatter;
use crate::types::NamedType;

/// A (possibly wrapped) GraphQL type reference as it appears on a field,
/// argument, or input field.
///
/// The set of wrappers is closed: a reference is either a terminal
/// [`NamedType`] or a [List](https://spec.graphql.org/October2021/#sec-List)
/// / [Non-Null](https://spec.graphql.org/October2021/#sec-Non-Null) wrapper
/// around exactly one inner reference.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDescriptor {
    List(Box<TypeDescriptor>),
    Named(NamedType),
    NonNull(Box<TypeDescriptor>),
}
impl TypeDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(name))
    }

    pub fn list(of_type: TypeDescriptor) -> Self {
        Self::List(Box::new(of_type))
    }

    pub fn non_null(of_type: TypeDescriptor) -> Self {
        Self::NonNull(Box::new(of_type))
    }

    /// Unwrap the [`NamedType`] if this descriptor is terminal.
    pub fn as_named(&self) -> Option<&NamedType> {
        if let Self::Named(named) = self {
            Some(named)
        } else {
            None
        }
    }

    /// The wrapped type for `List` and `NonNull` descriptors.
    pub fn of_type(&self) -> Option<&TypeDescriptor> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => Some(&**inner),
            Self::Named(_) => None,
        }
    }

    /// Recursively unwrap this [`TypeDescriptor`] and return the inner-most
    /// [`NamedType`] from it.
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            Self::List(inner) | Self::NonNull(inner)
                => inner.innermost_named_type(),
            Self::Named(named) => named,
        }
    }

    /// Number of List/NonNull wrappers around the innermost named type.
    pub fn depth(&self) -> usize {
        match self {
            Self::List(inner) | Self::NonNull(inner) => 1 + inner.depth(),
            Self::Named(_) => 0,
        }
    }

    /// Indicates if this [`TypeDescriptor`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    pub fn to_graphql_string(&self) -> String {
        type_name_formatter::format_type_name(self)
    }
}
impl std::convert::From<NamedType> for TypeDescriptor {
    fn from(value: NamedType) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        type_name_formatter::write_type_name(self, f)
    }
}
