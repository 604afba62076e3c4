//! Event translation for the Allegro 5 backend
//!
//! Free functions that push Allegro event data into Dear ImGui's IO event
//! queue. The dispatch itself lives in [`crate::AllegroPlatform`].

use allegro::KeyCode;
use dear_imgui_rs::Context;

use crate::input::{MODIFIER_KEYS, allegro_key_to_imgui_key, to_imgui_mouse_button};

/// Handle mouse axes: absolute position plus wheel deltas.
///
/// Allegro reports the vertical wheel on the z axis and the horizontal wheel
/// on the w axis, with w growing in the opposite direction of what Dear ImGui
/// expects.
pub fn handle_mouse_axes(imgui_ctx: &mut Context, x: i32, y: i32, dz: i32, dw: i32) -> bool {
    let io = imgui_ctx.io_mut();
    if dz != 0 || dw != 0 {
        io.add_mouse_wheel_event([-dw as f32, dz as f32]);
    }
    io.add_mouse_pos_event([x as f32, y as f32]);
    io.want_capture_mouse()
}

/// Handle a mouse button transition.
pub fn handle_mouse_button(imgui_ctx: &mut Context, button: u32, down: bool) -> bool {
    if let Some(imgui_button) = to_imgui_mouse_button(button) {
        let io = imgui_ctx.io_mut();
        io.add_mouse_button_event(imgui_button, down);
        return io.want_capture_mouse();
    }
    false
}

/// The mouse left the display: park the position so hover state clears and a
/// software-drawn cursor is not left at the last position.
pub fn handle_mouse_left_display(imgui_ctx: &mut Context) {
    imgui_ctx
        .io_mut()
        .add_mouse_pos_event([-f32::MAX, -f32::MAX]);
}

/// Handle a translated character from a key-char event.
pub fn handle_key_char(imgui_ctx: &mut Context, character: char) {
    // Allow tab through; other control characters are covered by key events
    if !character.is_control() || character == '\t' {
        imgui_ctx.io_mut().add_input_character(character);
    }
}

/// Handle a raw key transition.
pub fn handle_key(imgui_ctx: &mut Context, keycode: KeyCode, down: bool) -> bool {
    if let Some(imgui_key) = allegro_key_to_imgui_key(keycode) {
        let io = imgui_ctx.io_mut();
        io.add_key_event(imgui_key, down);
        return io.want_capture_keyboard();
    }
    false
}

/// Handle the display gaining or losing input focus.
///
/// The IO wrapper has no dedicated focus entry point, so focus loss releases
/// every modifier key and parks the mouse instead. That is enough to avoid
/// stuck modifiers and stale hover highlights across a focus gap.
pub fn handle_display_switch(imgui_ctx: &mut Context, focused: bool) {
    if !focused {
        let io = imgui_ctx.io_mut();
        for key in MODIFIER_KEYS {
            io.add_key_event(key, false);
        }
        io.add_mouse_pos_event([-f32::MAX, -f32::MAX]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dear_imgui_rs::Context;

    #[test]
    fn test_mouse_button_handling() {
        let mut ctx = Context::create_or_panic();

        let handled = handle_mouse_button(&mut ctx, 1, true);
        // Capture state depends on the frame; only the translation must not panic
        assert!(handled == true || handled == false);
        // Unknown buttons are never captured
        assert!(!handle_mouse_button(&mut ctx, 9, true));
    }

    #[test]
    fn test_key_char_filters_control_characters() {
        let mut ctx = Context::create_or_panic();

        handle_key_char(&mut ctx, 'a');
        handle_key_char(&mut ctx, '\t');
        handle_key_char(&mut ctx, '\u{1b}');
        handle_key_char(&mut ctx, '\u{7f}');
    }

    #[test]
    fn test_mouse_axes_updates_position() {
        let mut ctx = Context::create_or_panic();

        let handled = handle_mouse_axes(&mut ctx, 120, 48, 1, 0);
        assert!(handled == true || handled == false);
    }
}
