use crate::introspection::TypeKind;
use crate::InvalidTypeDescriptor;

#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
    #[error(
        "The type reference on `{coordinate}` is malformed: {source}"
    )]
    InvalidTypeRef {
        coordinate: String,
        source: InvalidTypeDescriptor,
    },

    #[error("Failed to parse introspection JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "The `{type_name}` type is a `{kind}` type, which has no fields or \
        input fields to list"
    )]
    TypeHasNoFields {
        kind: TypeKind,
        type_name: String,
    },

    #[error("The `{type_name}` type is not defined in the introspection schema")]
    UndefinedType {
        type_name: String,
    },
}
