use crate::doc_row::ArgumentEntry;
use crate::doc_row::CollapsePolicy;
use crate::doc_row::LabelSegment;
use crate::doc_row::NavStack;
use crate::doc_row::RowMetrics;
use crate::doc_row::RowState;
use crate::doc_row::TypeLink;
use crate::doc_row::TypeLinkProps;
use crate::doc_row::tests::test_utils;
use crate::types::NamedType;
use crate::types::TypeDescriptor;

fn metrics(scroll_width: f32, scroll_height: f32) -> RowMetrics {
    RowMetrics { scroll_height, scroll_width }
}

#[test]
fn renders_field_with_args_and_type() {
    let row = TypeLink::new(test_utils::user_field(), TypeLinkProps::at(1, 0));
    let label = row.render(RowState::default());
    assert_eq!(
        label.to_string(),
        "user(id: ID!, includeDeleted: Boolean = false): User",
    );
}

#[test]
fn renders_field_without_args_without_parens() {
    let row = TypeLink::new(test_utils::friends_field(), TypeLinkProps::at(1, 1));
    assert_eq!(
        row.render(RowState::default()).to_string(),
        "friends: [User!]!",
    );
}

#[test]
fn renders_schema_type_as_type_name_only() {
    let row = TypeLink::new(NamedType::new("Query"), TypeLinkProps::default());
    let label = row.render(RowState::default());
    assert_eq!(label.to_string(), "Query");
    assert_eq!(
        label.segments(),
        &[LabelSegment::TypeName("Query".to_string()), LabelSegment::Icon],
    );
}

#[test]
fn renders_argument_entry() {
    let arg = ArgumentEntry::new(
        "ids",
        TypeDescriptor::list(TypeDescriptor::non_null(TypeDescriptor::named("ID"))),
    );
    let row = TypeLink::new(arg, TypeLinkProps::default());
    assert_eq!(row.render(RowState::default()).to_string(), "ids: [ID!]");
}

#[test]
fn shows_parent_name_when_requested() {
    let props = TypeLinkProps {
        show_parent_name: true,
        ..TypeLinkProps::default()
    };
    let row = TypeLink::new(test_utils::friends_field(), props);
    let label = row.render(RowState::default());
    assert_eq!(label.to_string(), "User.friends: [User!]!");
    assert_eq!(label.segments()[0], LabelSegment::ParentName("User".to_string()));
    assert_eq!(label.segments()[2], LabelSegment::FieldName("friends".to_string()));
}

#[test]
fn renders_before_and_after_nodes() {
    let props = TypeLinkProps {
        after: Some("(deprecated)".to_string()),
        before: Some("query".to_string()),
        clickable: false,
        ..TypeLinkProps::default()
    };
    let row = TypeLink::new(NamedType::new("Query"), props);
    assert_eq!(
        row.render(RowState::default()).to_string(),
        "query Query (deprecated)",
    );
}

#[test]
fn icon_only_on_clickable_rows() {
    let clickable = TypeLink::new(NamedType::new("Query"), TypeLinkProps::default());
    let static_row = TypeLink::new(
        NamedType::new("Query"),
        TypeLinkProps { clickable: false, ..TypeLinkProps::default() },
    );
    assert!(clickable.render(RowState::default()).segments().contains(&LabelSegment::Icon));
    assert!(!static_row.render(RowState::default()).segments().contains(&LabelSegment::Icon));
}

#[test]
fn classes_reflect_props_and_state() {
    let props = TypeLinkProps {
        class_name: Some("field".to_string()),
        ..TypeLinkProps::default()
    };
    let row = TypeLink::new(test_utils::friends_field(), props);

    let idle = row.render(RowState::default());
    assert_eq!(idle.classes(), &["doc-category-item", "field", "clickable"]);

    let selected = row.render(RowState {
        is_active: true,
        key_move: true,
        last_active: true,
    });
    assert_eq!(
        selected.classes(),
        &["doc-category-item", "field", "clickable", "active", "last-active", "no-hover"],
    );
    assert!(selected.has_class("no-hover"));
}

#[test]
fn click_adds_entry_to_nav_stack() {
    let mut nav = NavStack::new();
    nav.add_stack(NamedType::new("Query").into(), 0, 0);
    nav.add_stack(NamedType::new("Other").into(), 1, 0);

    let row = TypeLink::new(test_utils::user_field(), TypeLinkProps::at(1, 2));
    assert!(row.click(&mut nav));

    assert_eq!(nav.len(), 2);
    assert_eq!(nav.frames()[1].entry(), row.entry());
    assert!(RowState::from_nav(Some(&nav), 1, 2).last_active);
}

#[test]
fn click_on_non_clickable_row_is_ignored() {
    let mut nav = NavStack::new();
    let row = TypeLink::new(
        test_utils::user_field(),
        TypeLinkProps { clickable: false, ..TypeLinkProps::default() },
    );
    assert!(!row.click(&mut nav));
    assert!(nav.is_empty());
}

#[test]
fn tall_collapsable_row_collapses_args_to_dots() {
    let props = TypeLinkProps {
        collapsable: true,
        ..TypeLinkProps::default()
    };
    let mut row = TypeLink::new(test_utils::user_field(), props);
    let policy = CollapsePolicy::default();

    let update = row.update_size(metrics(420.0, 20.0), &policy);
    assert!(!update.collapsed_now);
    assert!(!row.collapsed());

    let update = row.update_size(metrics(420.0, 62.0), &policy);
    assert!(update.collapsed_now);
    assert_eq!(update.scroll_width, 420.0);
    assert!(row.collapsed());
    assert_eq!(row.render(RowState::default()).to_string(), "user(...): User");

    // Collapsing is one-way.
    let update = row.update_size(metrics(150.0, 20.0), &policy);
    assert!(!update.collapsed_now);
    assert!(row.collapsed());
}

#[test]
fn non_collapsable_row_keeps_args() {
    let mut row = TypeLink::new(test_utils::user_field(), TypeLinkProps::default());
    let update = row.update_size(metrics(900.0, 90.0), &CollapsePolicy::default());
    assert!(!update.collapsed_now);
    assert_eq!(update.scroll_width, 900.0);
    assert!(row.render(RowState::default()).to_string().contains("id: ID!"));
}

#[test]
fn needs_rerender_tracks_entry_state_and_collapse() {
    let props = TypeLinkProps { collapsable: true, ..TypeLinkProps::default() };
    let prev = TypeLink::new(test_utils::user_field(), props.clone());
    let idle = RowState::default();
    let active = RowState { is_active: true, ..RowState::default() };

    assert!(!prev.clone().needs_rerender(&prev, idle, idle));
    assert!(prev.needs_rerender(&prev, idle, active));

    let other_entry = TypeLink::new(test_utils::friends_field(), props);
    assert!(other_entry.needs_rerender(&prev, idle, idle));

    let mut collapsed = prev.clone();
    collapsed.update_size(metrics(0.0, 100.0), &CollapsePolicy::default());
    assert!(collapsed.needs_rerender(&prev, idle, idle));
}

#[test]
fn text_width_counts_label_characters() {
    let row = TypeLink::new(test_utils::friends_field(), TypeLinkProps::default());
    let label = row.render(RowState::default());
    assert_eq!(label.text_width(), "friends: [User!]!".len());
}

#[test]
fn click_in_unreachable_column_is_ignored() {
    let mut nav = NavStack::new();
    nav.add_stack(NamedType::new("Query").into(), 0, 0);

    let row = TypeLink::new(test_utils::user_field(), TypeLinkProps::at(3, 0));
    assert!(!row.click(&mut nav));
    assert_eq!(nav.len(), 1);
    assert!(!RowState::from_nav(Some(&nav), 3, 0).is_active);
}

#[test]
fn argument_inline_string_matches_row_argument_text() {
    let field = test_utils::user_field();
    let inline_args = field.args().iter()
        .map(|arg| arg.to_inline_string())
        .collect::<Vec<_>>()
        .join(", ");
    assert_eq!(inline_args, "id: ID!, includeDeleted: Boolean = false");

    let row = TypeLink::new(field, TypeLinkProps::at(1, 0));
    assert_eq!(
        row.render(RowState::default()).to_string(),
        format!("user({inline_args}): User"),
    );
}
