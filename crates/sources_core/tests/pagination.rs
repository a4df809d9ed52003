mod common;

use sources_core::{next_page, previous_page, total_pages, update, Msg};

use common::{init_logging, mounted, records, settle};

#[test]
fn total_pages_floors_at_one() {
    assert_eq!(total_pages(0, 9), 1);
    assert_eq!(total_pages(1, 9), 1);
    assert_eq!(total_pages(9, 9), 1);
    assert_eq!(total_pages(10, 9), 2);
    assert_eq!(total_pages(23, 9), 3);
}

#[test]
fn navigation_clamps_at_bounds() {
    assert_eq!(next_page(3, 3), None);
    assert_eq!(next_page(2, 3), Some(3));
    assert_eq!(previous_page(1), None);
    assert_eq!(previous_page(2), Some(1));
}

#[test]
fn next_on_last_page_is_noop() {
    init_logging();
    let (state, effects) = mounted(None);
    let mut state = settle(state, &effects, records("only", 5), 5);
    assert!(state.consume_dirty());

    let (mut next, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
    assert_eq!(next.page(), 1);
    assert!(!next.consume_dirty());
}

#[test]
fn previous_on_first_page_is_noop() {
    init_logging();
    let (state, effects) = mounted(None);
    let state = settle(state, &effects, records("p1", 9), 23);

    let (next, effects) = update(state.clone(), Msg::PreviousPage);
    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn previous_moves_back_and_refetches() {
    init_logging();
    let (state, effects) = mounted(None);
    let state = settle(state, &effects, records("p1", 9), 23);
    let (state, effects) = update(state, Msg::NextPage);
    let state = settle(state, &effects, records("p2", 9), 23);

    let (state, effects) = update(state, Msg::PreviousPage);
    assert_eq!(state.page(), 1);
    assert_eq!(effects.len(), 2);
}

#[test]
fn next_is_disabled_while_count_is_unknown() {
    init_logging();
    let (state, _) = mounted(None);
    let (state, effects) = update(state, Msg::NextPage);
    assert!(effects.is_empty());
    assert!(!state.view().can_next);
}
