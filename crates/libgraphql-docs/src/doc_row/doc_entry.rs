use crate::doc_row::ArgumentEntry;
use crate::doc_row::FieldEntry;
use crate::types::NamedType;
use crate::types::TypeDescriptor;
use std::borrow::Cow;

/// The thing a single doc-explorer row points at.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DocEntry {
    Argument(ArgumentEntry),
    Field(FieldEntry),
    Type(NamedType),
}
impl DocEntry {
    /// Rows for a schema type render only the type name. Rows for fields and
    /// arguments are prefixed with `name: ` (and an argument list for
    /// fields).
    pub fn is_graphql_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Argument(arg) => arg.name(),
            Self::Field(field) => field.name(),
            Self::Type(named) => named.name(),
        }
    }

    pub fn parent_name(&self) -> Option<&str> {
        if let Self::Field(field) = self {
            field.parent_name()
        } else {
            None
        }
    }

    pub fn args(&self) -> &[ArgumentEntry] {
        if let Self::Field(field) = self {
            field.args()
        } else {
            &[]
        }
    }

    /// The type reference shown in the row's type-name slot. For a schema
    /// type that is the type itself.
    pub fn display_type(&self) -> Cow<'_, TypeDescriptor> {
        match self {
            Self::Argument(arg) => Cow::Borrowed(arg.type_descriptor()),
            Self::Field(field) => Cow::Borrowed(field.type_descriptor()),
            Self::Type(named) => Cow::Owned(TypeDescriptor::Named(named.clone())),
        }
    }
}
impl std::convert::From<ArgumentEntry> for DocEntry {
    fn from(value: ArgumentEntry) -> Self {
        Self::Argument(value)
    }
}
impl std::convert::From<FieldEntry> for DocEntry {
    fn from(value: FieldEntry) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<NamedType> for DocEntry {
    fn from(value: NamedType) -> Self {
        Self::Type(value)
    }
}
