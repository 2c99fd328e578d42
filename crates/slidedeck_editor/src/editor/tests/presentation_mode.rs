//! Presentation-mode transitions and platform side effects.

use super::*;

#[test]
fn presenting_an_empty_deck_is_rejected() {
    let mut harness = make_editor();
    let starter = harness.selected_id();
    harness.editor.delete_slide(&starter);

    let err = harness.editor.start_presentation().expect_err("rejected");

    assert!(matches!(err, EditorError::EmptyDeck));
    assert_eq!(harness.editor.mode(), EditorMode::Editing);
    assert_eq!(harness.platform.state.lock().unwrap().enter_calls, 0);
    assert!(harness.editor.status_text().is_some());
}

#[test]
fn starting_presentation_saves_dirty_state_and_takes_fullscreen() {
    let mut harness = make_editor();
    harness.editor.set_presentation_title("Demo day");
    assert!(harness.editor.state().is_dirty);

    harness.editor.start_presentation().expect("start");

    assert_eq!(harness.editor.mode(), EditorMode::Presenting);
    assert!(!harness.editor.state().is_dirty);
    assert!(harness.store.contents().expect("saved").contains("Demo day"));
    let platform = harness.platform.state.lock().unwrap();
    assert!(platform.fullscreen);
    assert!(platform.keys_installed);
    drop(platform);
    // The canvas was re-rendered for the presenting surface.
    assert_eq!(
        harness.canvases().last().cloned().flatten(),
        harness.editor.state().selected_slide_id
    );
}

#[test]
fn starting_presentation_captures_unflushed_edits() {
    let mut harness = make_editor();
    harness
        .editor
        .field_input(SlideField::Title, "Live title".to_string());

    harness.editor.start_presentation().expect("start");

    assert_eq!(harness.editor.state().slides[0].title, "Live title");
    assert!(harness
        .store
        .contents()
        .expect("implicit save")
        .contains("Live title"));
}

#[test]
fn fullscreen_refusal_does_not_block_the_transition() {
    let mut harness = make_editor();
    harness.platform.state.lock().unwrap().refuse_fullscreen = true;

    harness.editor.start_presentation().expect("start");

    assert_eq!(harness.editor.mode(), EditorMode::Presenting);
    let platform = harness.platform.state.lock().unwrap();
    assert!(!platform.fullscreen);
    assert!(platform.keys_installed);
}

#[test]
fn reentering_the_current_mode_is_a_noop() {
    let mut harness = make_editor();
    harness.editor.start_presentation().expect("start");
    harness.editor.start_presentation().expect("again");
    assert_eq!(harness.platform.state.lock().unwrap().enter_calls, 1);

    harness.editor.exit_presentation();
    harness.editor.exit_presentation();
    assert_eq!(harness.platform.state.lock().unwrap().exit_calls, 1);
}

#[test]
fn exit_restores_editing_state_and_removes_key_scope() {
    let mut harness = make_editor();
    harness.editor.start_presentation().expect("start");
    let canvases_before = harness.canvases().len();

    harness.editor.exit_presentation();

    assert_eq!(harness.editor.mode(), EditorMode::Editing);
    let platform = harness.platform.state.lock().unwrap();
    assert!(!platform.fullscreen);
    assert!(!platform.keys_installed);
    drop(platform);
    assert_eq!(harness.canvases().len(), canvases_before + 1);
}

#[test]
fn external_fullscreen_exit_runs_the_full_cleanup() {
    let mut harness = make_editor();
    harness.editor.start_presentation().expect("start");

    // e.g. the user pressed Escape and the platform dropped fullscreen.
    harness.editor.fullscreen_changed(false);

    assert_eq!(harness.editor.mode(), EditorMode::Editing);
    assert!(!harness.platform.state.lock().unwrap().keys_installed);
}

#[test]
fn fullscreen_notifications_outside_presenting_are_ignored() {
    let mut harness = make_editor();
    let exits_before = harness.platform.state.lock().unwrap().exit_calls;

    harness.editor.fullscreen_changed(false);
    harness.editor.fullscreen_changed(true);

    assert_eq!(harness.editor.mode(), EditorMode::Editing);
    assert_eq!(
        harness.platform.state.lock().unwrap().exit_calls,
        exits_before
    );
}

#[test]
fn presenting_with_no_selection_selects_the_first_slide() {
    let mut harness = make_editor();
    harness.editor.state.selected_slide_id = None;

    harness.editor.start_presentation().expect("start");

    assert_eq!(
        harness.editor.state().selected_slide_id.as_deref(),
        Some(harness.editor.state().slides[0].id.as_str())
    );
}
