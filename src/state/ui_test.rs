use super::*;

#[test]
fn ui_state_defaults_to_light_mode() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn restore_is_light_mode_off_browser() {
    // Without a window there is no stored preference and no media query.
    assert!(!UiState::restore().dark_mode);
}

#[test]
fn toggle_flips_the_flag_both_ways() {
    let mut state = UiState::default();
    state.toggle();
    assert!(state.dark_mode);
    state.toggle();
    assert!(!state.dark_mode);
}
