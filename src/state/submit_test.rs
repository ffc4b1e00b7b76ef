use super::*;

// =============================================================
// Lifecycle variants
// =============================================================

#[test]
fn default_is_idle() {
    let state: SubmitState<String> = SubmitState::default();
    assert!(state.is_idle());
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

#[test]
fn loading_holds_no_result_or_error() {
    let state: SubmitState<String> = SubmitState::Loading;
    assert!(state.is_loading());
    assert!(state.result().is_none());
    assert!(state.error().is_none());
}

#[test]
fn success_exposes_result_only() {
    let state = SubmitState::Success(42);
    assert!(!state.is_idle());
    assert!(!state.is_loading());
    assert_eq!(state.result(), Some(&42));
    assert!(state.error().is_none());
}

#[test]
fn failed_exposes_error_only() {
    let state: SubmitState<i32> = SubmitState::Failed("boom".to_owned());
    assert!(!state.is_loading());
    assert!(state.result().is_none());
    assert_eq!(state.error(), Some("boom"));
}

// =============================================================
// Settlement and reset
// =============================================================

#[test]
fn settled_ok_becomes_success() {
    let state = SubmitState::settled(Ok("body".to_owned()));
    assert_eq!(state, SubmitState::Success("body".to_owned()));
}

#[test]
fn settled_err_becomes_failed() {
    let state: SubmitState<String> = SubmitState::settled(Err("down".to_owned()));
    assert_eq!(state, SubmitState::Failed("down".to_owned()));
}

#[test]
fn reset_discards_result() {
    let mut state = SubmitState::Success(7);
    state.reset();
    assert!(state.is_idle());
}

#[test]
fn reset_discards_error() {
    let mut state: SubmitState<i32> = SubmitState::Failed("down".to_owned());
    state.reset();
    assert!(state.is_idle());
}
