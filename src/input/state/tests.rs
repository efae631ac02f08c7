use super::*;
use crate::config::{Action, Config};
use crate::draw::{Point, Preview, Recorder};
use crate::input::{Key, MouseButton, Tool};

fn create_test_input_state() -> InputState {
    InputState::from_config(&Config::default()).unwrap()
}

fn press_chord(state: &mut InputState, modifiers: &[Key], key: Key) {
    for modifier in modifiers {
        state.on_key_press(*modifier);
    }
    state.on_key_press(key);
    for modifier in modifiers {
        state.on_key_release(*modifier);
    }
}

fn draw_line(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    state.on_mouse_motion(to.0, to.1);
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

#[test]
fn test_defaults_from_config() {
    let state = create_test_input_state();
    assert_eq!(state.tool, Tool::Pen);
    assert_eq!(state.current_thickness, 1.0);
    assert_eq!(state.thin_thickness, 1.0);
    assert_eq!(state.thick_thickness, 5.0);
    assert_eq!(state.current_sticker(), "★");
    assert!(state.needs_redraw);
    assert!(state.preview().is_none());
}

#[test]
fn test_press_move_release_commits_stroke() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    assert!(state.history().is_drawing());
    state.on_mouse_motion(10.0, 0.0);
    state.on_mouse_motion(10.0, 10.0);
    state.on_mouse_release(MouseButton::Left, 10.0, 10.0);

    let history = state.history();
    assert!(!history.is_drawing());
    assert_eq!(history.done().len(), 1);
    let stroke = history.done()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0)
        ]
    );
}

#[test]
fn test_release_without_press_is_ignored() {
    let mut state = create_test_input_state();
    state.on_mouse_release(MouseButton::Left, 5.0, 5.0);
    assert!(state.history().done().is_empty());
}

#[test]
fn test_right_click_cancels_gesture() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_mouse_motion(4.0, 4.0);
    state.on_mouse_press(MouseButton::Right, 4.0, 4.0);
    state.on_mouse_release(MouseButton::Left, 4.0, 4.0);

    assert!(state.history().done().is_empty());
    assert!(!state.history().is_drawing());
}

#[test]
fn test_thick_preset_applies_to_next_stroke() {
    let mut state = create_test_input_state();
    state.handle_action(Action::SelectThick);
    draw_line(&mut state, (0.0, 0.0), (5.0, 5.0));
    state.handle_action(Action::SelectThin);
    draw_line(&mut state, (1.0, 1.0), (6.0, 6.0));

    let done = state.history().done();
    assert_eq!(done[0].as_stroke().unwrap().thickness(), 5.0);
    assert_eq!(done[1].as_stroke().unwrap().thickness(), 1.0);
}

#[test]
fn test_adjust_thickness_clamps() {
    let mut state = create_test_input_state();
    state.adjust_thickness(-10.0);
    assert_eq!(state.current_thickness, MIN_THICKNESS);
    state.adjust_thickness(100.0);
    assert_eq!(state.current_thickness, MAX_THICKNESS);

    state.handle_action(Action::DecreaseThickness);
    assert_eq!(state.current_thickness, MAX_THICKNESS - 1.0);
    state.handle_action(Action::IncreaseThickness);
    assert_eq!(state.current_thickness, MAX_THICKNESS);
}

#[test]
fn test_sticker_drag_moves_anchor() {
    let mut state = create_test_input_state();
    assert!(state.select_sticker(1));
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.on_mouse_motion(6.0, 6.0);
    state.on_mouse_motion(20.0, 30.0);
    state.on_mouse_release(MouseButton::Left, 20.0, 30.0);

    let sticker = state.history().done()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "♥");
    assert_eq!(sticker.anchor(), Point::new(20.0, 30.0));
    assert_eq!(sticker.size(), state.sticker_size);
}

#[test]
fn test_select_sticker_out_of_range_keeps_selection() {
    let mut state = create_test_input_state();
    assert!(!state.select_sticker(99));
    assert_eq!(state.tool, Tool::Pen);
}

#[test]
fn test_next_sticker_cycles_palette() {
    let mut state = create_test_input_state();
    state.handle_action(Action::NextSticker);
    assert_eq!(state.tool, Tool::Sticker);
    assert_eq!(state.current_sticker(), "★");

    state.handle_action(Action::NextSticker);
    assert_eq!(state.current_sticker(), "♥");
    state.handle_action(Action::NextSticker);
    state.handle_action(Action::NextSticker);
    assert_eq!(state.current_sticker(), "★");

    state.handle_action(Action::SelectPen);
    assert_eq!(state.tool, Tool::Pen);
}

#[test]
fn test_preview_follows_pointer_while_idle() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(12.0, 8.0);
    assert_eq!(
        state.preview(),
        Some(&Preview::Brush {
            at: Point::new(12.0, 8.0),
            thickness: 1.0,
        })
    );
    assert!(state.history().done().is_empty());
    assert!(!state.history().is_drawing());
}

#[test]
fn test_preview_hidden_while_drawing_and_restored_on_release() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(1.0, 1.0);
    state.on_mouse_press(MouseButton::Left, 1.0, 1.0);
    assert!(state.preview().is_none());

    state.on_mouse_motion(2.0, 2.0);
    assert!(state.preview().is_none());

    state.on_mouse_release(MouseButton::Left, 2.0, 2.0);
    assert_eq!(
        state.preview().map(|p| p.position()),
        Some(Point::new(2.0, 2.0))
    );
}

#[test]
fn test_preview_cleared_on_leave() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(3.0, 3.0);
    assert!(state.preview().is_some());

    state.on_mouse_leave();
    assert!(state.preview().is_none());
    assert!(state.pointer().is_none());
}

#[test]
fn test_release_after_leave_does_not_restore_preview() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(40.0, 40.0);
    state.on_mouse_leave();
    state.on_mouse_release(MouseButton::Left, 0.0, 0.0);

    assert_eq!(state.history().done().len(), 1);
    assert!(state.pointer().is_none());
    assert!(state.preview().is_none());
}

#[test]
fn test_release_outside_commits_without_preview() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 10.0, 10.0);
    state.on_mouse_motion(40.0, 40.0);
    state.on_mouse_release_outside(MouseButton::Left);

    assert_eq!(state.history().done().len(), 1);
    assert!(state.pointer().is_none());
    assert!(state.preview().is_none());
}

#[test]
fn test_right_press_after_leave_does_not_restore_preview() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(5.0, 5.0);
    state.on_mouse_leave();
    state.on_mouse_press(MouseButton::Right, 5.0, 5.0);

    assert!(state.pointer().is_none());
    assert!(state.preview().is_none());
}

#[test]
fn test_motion_after_leave_restores_preview() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(5.0, 5.0);
    state.on_mouse_leave();
    state.on_mouse_motion(6.0, 7.0);

    assert_eq!(
        state.preview().map(|p| p.position()),
        Some(Point::new(6.0, 7.0))
    );
}

#[test]
fn test_select_pen_rejects_nan() {
    let mut state = create_test_input_state();
    state.select_pen(f64::NAN);
    assert_eq!(state.current_thickness, MIN_THICKNESS);

    state.adjust_thickness(1.0);
    assert_eq!(state.current_thickness, MIN_THICKNESS + 1.0);
}

#[test]
fn test_preview_tracks_tool_changes() {
    let mut state = create_test_input_state();
    state.on_mouse_motion(3.0, 3.0);
    state.handle_action(Action::NextSticker);
    assert!(matches!(
        state.preview(),
        Some(Preview::Sticker { glyph, .. }) if glyph == "★"
    ));

    state.handle_action(Action::SelectThick);
    assert_eq!(
        state.preview(),
        Some(&Preview::Brush {
            at: Point::new(3.0, 3.0),
            thickness: 5.0,
        })
    );
}

#[test]
fn test_preview_disabled() {
    let mut config = Config::default();
    config.preview.enabled = false;
    let mut state = InputState::from_config(&config).unwrap();
    state.on_mouse_motion(3.0, 3.0);
    assert!(state.preview().is_none());
}

#[test]
fn test_keybindings_drive_history() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (0.0, 0.0), (1.0, 1.0));
    draw_line(&mut state, (2.0, 2.0), (3.0, 3.0));

    press_chord(&mut state, &[Key::Ctrl], Key::Char('z'));
    assert_eq!(state.history().done().len(), 1);
    assert_eq!(state.history().undone().len(), 1);

    press_chord(&mut state, &[Key::Ctrl, Key::Shift], Key::Char('Z'));
    assert_eq!(state.history().done().len(), 2);

    press_chord(&mut state, &[], Key::Char('e'));
    assert!(state.history().done().is_empty());
    assert!(state.history().undone().is_empty());
}

#[test]
fn test_modifiers_released_after_chord() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (0.0, 0.0), (1.0, 1.0));
    press_chord(&mut state, &[Key::Ctrl], Key::Char('z'));

    // Plain 'z' is unbound once Ctrl is released
    state.handle_action(Action::Redo);
    state.on_key_press(Key::Char('z'));
    assert_eq!(state.history().done().len(), 1);
}

#[test]
fn test_escape_cancels_open_gesture() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
    state.on_key_press(Key::Escape);
    assert!(!state.history().is_drawing());
    state.on_mouse_release(MouseButton::Left, 0.0, 0.0);
    assert!(state.history().done().is_empty());
}

#[test]
fn test_clear_cancels_open_gesture() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (0.0, 0.0), (1.0, 1.0));
    state.on_mouse_press(MouseButton::Left, 5.0, 5.0);
    state.handle_action(Action::ClearCanvas);

    assert!(!state.history().is_drawing());
    state.on_mouse_release(MouseButton::Left, 5.0, 5.0);
    assert!(state.history().done().is_empty());
}

#[test]
fn test_render_clears_redraw_flag_and_layers_preview_last() {
    let mut state = create_test_input_state();
    draw_line(&mut state, (0.0, 0.0), (10.0, 0.0));
    state.on_mouse_motion(20.0, 20.0);
    assert!(state.needs_redraw);

    let mut rec = Recorder::new();
    state.render(&mut rec);
    assert!(!state.needs_redraw);

    assert_eq!(rec.stroked_paths().len(), 1);
    assert!(matches!(
        rec.ops().last(),
        Some(crate::draw::DrawOp::FillCircle { .. })
    ));
}

#[test]
fn test_undo_on_empty_history_does_not_request_redraw() {
    let mut state = create_test_input_state();
    let mut rec = Recorder::new();
    state.render(&mut rec);

    state.handle_action(Action::Undo);
    state.handle_action(Action::Redo);
    assert!(!state.needs_redraw);
}
