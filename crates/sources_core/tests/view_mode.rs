mod common;

use sources_core::{update, ActivationKey, Msg, ViewMode, ViewModeSwitch};

use common::{init_logging, mounted};

#[test]
fn toggle_switches_layout_without_effects() {
    init_logging();
    let (state, _) = mounted(None);
    assert_eq!(state.view().view_mode, ViewMode::Grid);
    assert!(!state.view().view_switch.checked);

    let (state, effects) = update(state, Msg::ViewModeToggled);
    assert!(effects.is_empty());
    assert_eq!(state.view().view_mode, ViewMode::List);
    assert!(state.view().view_switch.checked);

    let (state, _) = update(state, Msg::ViewModeToggled);
    assert_eq!(state.view().view_mode, ViewMode::Grid);
}

#[test]
fn activation_keys_toggle_and_others_do_not() {
    init_logging();
    let (state, _) = mounted(None);

    let (state, effects) = update(state, Msg::ViewModeKey(ActivationKey::Enter));
    assert!(effects.is_empty());
    assert_eq!(state.view().view_mode, ViewMode::List);

    let (state, _) = update(state, Msg::ViewModeKey(ActivationKey::Space));
    assert_eq!(state.view().view_mode, ViewMode::Grid);

    let (mut state, _) = update(state, Msg::ViewModeKey(ActivationKey::Other));
    assert_eq!(state.view().view_mode, ViewMode::Grid);
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::ViewModeKey(ActivationKey::Other));
    assert!(!state.consume_dirty());
}

#[test]
fn switch_exposes_switch_role() {
    assert_eq!(ViewModeSwitch::ROLE, "switch");
}
