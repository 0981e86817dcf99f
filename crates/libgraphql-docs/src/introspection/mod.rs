//! Deserialization of GraphQL
//! [introspection](https://spec.graphql.org/October2021/#sec-Introspection)
//! results into [`TypeDescriptor`](crate::types::TypeDescriptor)s and
//! [`DocEntry`](crate::doc_row::DocEntry)s.

mod introspection_error;
mod introspection_schema;
mod introspection_type_ref;
mod type_kind;

pub use introspection_error::IntrospectionError;
pub use introspection_schema::IntrospectionField;
pub use introspection_schema::IntrospectionInputValue;
pub use introspection_schema::IntrospectionSchema;
pub use introspection_schema::IntrospectionType;
pub use introspection_type_ref::IntrospectionTypeRef;
pub(crate) use introspection_type_ref::TypeRefNode;
pub use type_kind::TypeKind;

#[cfg(test)]
mod tests;
