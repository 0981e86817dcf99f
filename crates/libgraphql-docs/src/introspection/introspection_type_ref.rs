use crate::introspection::TypeKind;
use crate::types::NamedType;
use crate::types::TypeDescriptor;
use crate::InvalidTypeDescriptor;
use crate::InvalidTypeDescriptorReason;

/// A `__Type` reference exactly as it appears in an introspection result:
///
/// ```json
/// { "kind": "NON_NULL", "name": null, "ofType": { "kind": "SCALAR", "name": "Int", "ofType": null } }
/// ```
///
/// Nothing about this shape guarantees well-formedness, so converting it to
/// a [`TypeDescriptor`] (or formatting it directly) is fallible.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionTypeRef {
    pub kind: Option<TypeKind>,
    pub name: Option<String>,
    pub of_type: Option<Box<IntrospectionTypeRef>>,
}

pub(crate) enum TypeRefNode<'a> {
    List(&'a IntrospectionTypeRef),
    Named(&'a str),
    NonNull(&'a IntrospectionTypeRef),
}

impl IntrospectionTypeRef {
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn list(of_type: IntrospectionTypeRef) -> Self {
        Self {
            kind: Some(TypeKind::List),
            name: None,
            of_type: Some(Box::new(of_type)),
        }
    }

    pub fn non_null(of_type: IntrospectionTypeRef) -> Self {
        Self {
            kind: Some(TypeKind::NonNull),
            name: None,
            of_type: Some(Box::new(of_type)),
        }
    }

    /// Identify this node as a named, list, or non-null reference. `depth` is
    /// only used to annotate the error.
    ///
    /// When `kind` is absent a `name` is enough to treat the node as named.
    pub(crate) fn classify(
        &self,
        depth: usize,
    ) -> Result<TypeRefNode<'_>, InvalidTypeDescriptor> {
        let invalid = |reason| InvalidTypeDescriptor::new(depth, reason);
        match (self.kind, self.name.as_deref(), self.of_type.as_deref()) {
            (Some(TypeKind::NonNull), _, Some(inner))
                => Ok(TypeRefNode::NonNull(inner)),
            (Some(TypeKind::List), _, Some(inner))
                => Ok(TypeRefNode::List(inner)),
            (Some(kind), _, None) if kind.is_wrapper()
                => Err(invalid(InvalidTypeDescriptorReason::MissingOfType(kind))),
            (Some(_), Some(name), _)
                => Ok(TypeRefNode::Named(name)),
            (Some(kind), None, _)
                => Err(invalid(InvalidTypeDescriptorReason::MissingName(kind))),
            (None, Some(name), _)
                => Ok(TypeRefNode::Named(name)),
            (None, None, Some(_))
                => Err(invalid(InvalidTypeDescriptorReason::UnclassifiedWrapper)),
            (None, None, None)
                => Err(invalid(InvalidTypeDescriptorReason::MissingNameAndOfType)),
        }
    }

    fn to_type_descriptor(
        &self,
        depth: usize,
    ) -> Result<TypeDescriptor, InvalidTypeDescriptor> {
        Ok(match self.classify(depth)? {
            TypeRefNode::List(inner)
                => TypeDescriptor::list(inner.to_type_descriptor(depth + 1)?),
            TypeRefNode::Named(name)
                => TypeDescriptor::Named(NamedType::new(name)),
            TypeRefNode::NonNull(inner)
                => TypeDescriptor::non_null(inner.to_type_descriptor(depth + 1)?),
        })
    }
}
impl std::convert::TryFrom<&IntrospectionTypeRef> for TypeDescriptor {
    type Error = InvalidTypeDescriptor;

    fn try_from(value: &IntrospectionTypeRef) -> Result<Self, Self::Error> {
        value.to_type_descriptor(0)
    }
}
impl std::convert::From<&TypeDescriptor> for IntrospectionTypeRef {
    /// Named types carry no kind information in a [`TypeDescriptor`], so the
    /// innermost node is emitted without a `kind`.
    fn from(value: &TypeDescriptor) -> Self {
        match value {
            TypeDescriptor::List(inner) => Self::list(Self::from(&**inner)),
            TypeDescriptor::Named(named) => Self {
                kind: None,
                name: Some(named.name().to_string()),
                of_type: None,
            },
            TypeDescriptor::NonNull(inner) => Self::non_null(Self::from(&**inner)),
        }
    }
}
