use crate::doc_row::DocEntry;
use crate::doc_row::NavStack;
use crate::doc_row::tests::test_utils;
use crate::types::NamedType;

#[test]
fn add_stack_pushes_frames_in_order() {
    let mut nav = NavStack::new();
    assert!(nav.is_empty());

    nav.add_stack(NamedType::new("Query").into(), 0, 0);
    nav.add_stack(test_utils::user_field().into(), 1, 3);

    assert_eq!(nav.len(), 2);
    let frame = nav.frame(1).expect("second frame");
    assert_eq!(frame.entry().name(), "user");
    assert_eq!((frame.x(), frame.y()), (1, 3));
}

#[test]
fn add_stack_replaces_columns_at_and_after_x() {
    let mut nav = NavStack::new();
    nav.add_stack(NamedType::new("Query").into(), 0, 0);
    nav.add_stack(test_utils::user_field().into(), 1, 0);
    nav.add_stack(test_utils::friends_field().into(), 2, 1);

    nav.add_stack(NamedType::new("Mutation").into(), 1, 4);

    assert_eq!(nav.len(), 2);
    assert_eq!(nav.frames()[0].entry().name(), "Query");
    assert_eq!(
        nav.frames()[1].entry(),
        &DocEntry::Type(NamedType::new("Mutation")),
    );
    assert_eq!(nav.frames()[1].y(), 4);
}

#[test]
fn pop_removes_last_frame() {
    let mut nav = NavStack::new();
    nav.add_stack(NamedType::new("Query").into(), 0, 0);
    nav.add_stack(test_utils::user_field().into(), 1, 0);

    let popped = nav.pop().expect("a frame to pop");
    assert_eq!(popped.entry().name(), "user");
    assert_eq!(nav.len(), 1);
}

#[test]
fn key_move_flag_round_trips() {
    let mut nav = NavStack::new();
    assert!(!nav.key_move());
    nav.set_key_move(true);
    assert!(nav.key_move());
}

#[test]
fn add_stack_rejects_column_past_end_of_stack() {
    let mut nav = NavStack::new();
    assert!(nav.add_stack(NamedType::new("Query").into(), 0, 0));

    assert!(!nav.add_stack(test_utils::user_field().into(), 2, 1));

    assert_eq!(nav.len(), 1);
    assert_eq!(nav.frames()[0].entry().name(), "Query");
    for (idx, frame) in nav.frames().iter().enumerate() {
        assert_eq!(frame.x(), idx);
    }
}

#[test]
fn add_stack_accepts_the_next_open_column() {
    let mut nav = NavStack::new();
    assert!(nav.add_stack(NamedType::new("Query").into(), 0, 0));
    assert!(nav.add_stack(test_utils::user_field().into(), 1, 1));
    assert_eq!(nav.frame(1).map(|frame| frame.x()), Some(1));
}
