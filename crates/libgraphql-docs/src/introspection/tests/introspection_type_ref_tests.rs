use crate::introspection::IntrospectionTypeRef;
use crate::introspection::TypeKind;
use crate::types::TypeDescriptor;
use crate::InvalidTypeDescriptorReason;

fn parse(json: &str) -> IntrospectionTypeRef {
    serde_json::from_str(json).expect("valid type ref json")
}

#[test]
fn deserializes_wrapped_type_ref() {
    let type_ref = parse(r#"{
        "kind": "NON_NULL",
        "name": null,
        "ofType": {
            "kind": "LIST",
            "name": null,
            "ofType": {
                "kind": "INPUT_OBJECT",
                "name": "UserFilter",
                "ofType": null
            }
        }
    }"#);
    let type_ = TypeDescriptor::try_from(&type_ref).expect("well formed");
    assert_eq!(
        type_,
        TypeDescriptor::non_null(
            TypeDescriptor::list(TypeDescriptor::named("UserFilter")),
        ),
    );
}

#[test]
fn name_without_kind_is_a_named_type() {
    let type_ = TypeDescriptor::try_from(&parse(r#"{"name": "String"}"#))
        .expect("named type");
    assert_eq!(type_, TypeDescriptor::named("String"));
}

#[test]
fn empty_type_ref_is_invalid() {
    let err = TypeDescriptor::try_from(&parse("{}"))
        .expect_err("no name and no ofType");
    assert_eq!(err.reason(), InvalidTypeDescriptorReason::MissingNameAndOfType);
}

#[test]
fn wrapper_kind_without_of_type_is_invalid() {
    let err = TypeDescriptor::try_from(&parse(r#"{"kind": "LIST"}"#))
        .expect_err("list without ofType");
    assert_eq!(
        err.reason(),
        InvalidTypeDescriptorReason::MissingOfType(TypeKind::List),
    );
}

#[test]
fn named_kind_without_name_is_invalid() {
    let err = TypeDescriptor::try_from(&parse(r#"{"kind": "OBJECT", "name": null}"#))
        .expect_err("object without name");
    assert_eq!(
        err.reason(),
        InvalidTypeDescriptorReason::MissingName(TypeKind::Object),
    );
}

#[test]
fn of_type_without_kind_is_invalid() {
    let err = TypeDescriptor::try_from(&parse(r#"{"ofType": {"name": "Int"}}"#))
        .expect_err("unclassifiable wrapper");
    assert_eq!(err.reason(), InvalidTypeDescriptorReason::UnclassifiedWrapper);
    assert_eq!(err.depth(), 0);
}

#[test]
fn descriptor_converts_back_to_type_ref() {
    let type_ = TypeDescriptor::list(
        TypeDescriptor::non_null(TypeDescriptor::named("ID")),
    );
    let type_ref = IntrospectionTypeRef::from(&type_);
    assert_eq!(type_ref.kind, Some(TypeKind::List));
    let inner = type_ref.of_type.as_deref().expect("list has ofType");
    assert_eq!(inner.kind, Some(TypeKind::NonNull));
    assert_eq!(TypeDescriptor::try_from(&type_ref), Ok(type_));
}
