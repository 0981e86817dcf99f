use crate::introspection::TypeKind;

/// Why a type reference node could not be classified as a named, list, or
/// non-null type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InvalidTypeDescriptorReason {
    #[error("type reference has neither a `name` nor an `ofType`")]
    MissingNameAndOfType,

    #[error("named type reference of kind `{0}` has no `name`")]
    MissingName(TypeKind),

    #[error("wrapper type reference of kind `{0}` has no `ofType`")]
    MissingOfType(TypeKind),

    #[error(
        "type reference has an `ofType` but no `kind`, so it cannot be \
        identified as either a list or a non-null wrapper"
    )]
    UnclassifiedWrapper,
}

/// A malformed type reference reached the formatter. This indicates a schema
/// node that was never validated upstream.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Invalid type descriptor at wrapper depth {depth}: {reason}")]
pub struct InvalidTypeDescriptor {
    pub(crate) depth: usize,
    pub(crate) reason: InvalidTypeDescriptorReason,
}
impl InvalidTypeDescriptor {
    pub(crate) fn new(depth: usize, reason: InvalidTypeDescriptorReason) -> Self {
        Self { depth, reason }
    }

    /// How many List/NonNull wrappers enclose the malformed node. `0` means
    /// the outermost node itself is malformed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn reason(&self) -> InvalidTypeDescriptorReason {
        self.reason
    }
}
