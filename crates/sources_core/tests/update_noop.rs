use sources_core::{update, AppState, Msg};

#[test]
fn input_before_mount_is_ignored() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::SearchInput("alpha".to_string()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn paging_and_toggling_before_mount_are_ignored() {
    let state = AppState::new();
    for msg in [Msg::NextPage, Msg::PreviousPage, Msg::ViewModeToggled] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}
