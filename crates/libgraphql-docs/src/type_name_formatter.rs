//! Renders GraphQL type references in their standard textual form: `String`,
//! `[String]`, `String!`, `[String!]!`, `[[Int!]]`, ...

use crate::introspection::IntrospectionTypeRef;
use crate::introspection::TypeRefNode;
use crate::types::TypeDescriptor;
use crate::InvalidTypeDescriptor;

/// Render a [`TypeDescriptor`] as a GraphQL type reference string.
pub fn format_type_name(type_: &TypeDescriptor) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = write_type_name(type_, &mut out);
    out
}

/// Same as [`format_type_name`], but writes into any [`std::fmt::Write`]
/// sink instead of allocating.
///
/// A `NonNull` wrapper decorates the already-rendered inner form, so
/// `NonNull(List(Int))` renders as `[Int]!` while `List(NonNull(Int))`
/// renders as `[Int!]`.
pub fn write_type_name<W: std::fmt::Write + ?Sized>(
    type_: &TypeDescriptor,
    out: &mut W,
) -> std::fmt::Result {
    match type_ {
        TypeDescriptor::NonNull(inner) => {
            write_type_name(inner, out)?;
            out.write_char('!')
        },

        TypeDescriptor::List(inner) => {
            out.write_char('[')?;
            write_type_name(inner, out)?;
            out.write_char(']')
        },

        TypeDescriptor::Named(named) => out.write_str(named.name()),
    }
}

/// Render a raw introspection type reference (`{ kind, name, ofType }`)
/// without first converting it to a [`TypeDescriptor`].
///
/// Fails with [`InvalidTypeDescriptor`] on the first node in the wrapper
/// chain that is neither a named type nor a well-formed wrapper.
pub fn format_introspection_type_ref(
    type_ref: &IntrospectionTypeRef,
) -> Result<String, InvalidTypeDescriptor> {
    let mut out = String::new();
    write_introspection_type_ref(type_ref, 0, &mut out)?;
    Ok(out)
}

fn write_introspection_type_ref(
    type_ref: &IntrospectionTypeRef,
    depth: usize,
    out: &mut String,
) -> Result<(), InvalidTypeDescriptor> {
    match type_ref.classify(depth)? {
        TypeRefNode::NonNull(inner) => {
            write_introspection_type_ref(inner, depth + 1, out)?;
            out.push('!');
        },

        TypeRefNode::List(inner) => {
            out.push('[');
            write_introspection_type_ref(inner, depth + 1, out)?;
            out.push(']');
        },

        TypeRefNode::Named(name) => out.push_str(name),
    }
    Ok(())
}
