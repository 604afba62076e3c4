//! NSEvent translation for the macOS backend
//!
//! Free functions that push AppKit event data into Dear ImGui's IO event
//! queue. The dispatch on the event type lives in [`crate::OsxPlatform`].

use dear_imgui_rs::{Context, Key};
use objc2_app_kit::{NSEvent, NSView};

use crate::input::{keycode_to_imgui_key, to_imgui_mouse_button, translate_modifiers};

/// Handle a mouse button transition for an AppKit button number.
pub fn handle_mouse_button(imgui_ctx: &mut Context, button: isize, down: bool) -> bool {
    if let Some(imgui_button) = to_imgui_mouse_button(button) {
        let io = imgui_ctx.io_mut();
        io.add_mouse_button_event(imgui_button, down);
        return io.want_capture_mouse();
    }
    false
}

/// Handle mouse movement (moved and dragged variants).
///
/// The window location is converted into the view's coordinate space and
/// flipped to the top-left origin Dear ImGui expects when the view itself is
/// not flipped.
pub fn handle_mouse_moved(imgui_ctx: &mut Context, event: &NSEvent, view: &NSView) -> bool {
    let window_pos = event.locationInWindow();
    let local = view.convertPoint_fromView(window_pos, None);
    let y = if view.isFlipped() {
        local.y
    } else {
        view.bounds().size.height - local.y
    };

    let io = imgui_ctx.io_mut();
    io.add_mouse_pos_event([local.x as f32, y as f32]);
    io.want_capture_mouse()
}

/// Handle a scroll wheel event.
///
/// Precise (trackpad/pixel) deltas are scaled down to line-ish units; plain
/// line deltas pass through unscaled.
pub fn handle_scroll_wheel(imgui_ctx: &mut Context, event: &NSEvent) -> bool {
    let mut dx = event.scrollingDeltaX();
    let mut dy = event.scrollingDeltaY();
    if event.hasPreciseScrollingDeltas() {
        dx *= 0.1;
        dy *= 0.1;
    }

    let io = imgui_ctx.io_mut();
    if dx != 0.0 || dy != 0.0 {
        io.add_mouse_wheel_event([dx as f32, dy as f32]);
    }
    io.want_capture_mouse()
}

/// Handle a key down/up event.
///
/// Key-down also feeds the event's characters into text input. Characters in
/// the `0xF700` private-use block are function-key placeholders (arrows,
/// F-keys) and are never text.
pub fn handle_key(imgui_ctx: &mut Context, event: &NSEvent, down: bool) -> bool {
    let io = imgui_ctx.io_mut();

    if let Some(imgui_key) = keycode_to_imgui_key(event.keyCode()) {
        io.add_key_event(imgui_key, down);
    }

    if down {
        if let Some(characters) = unsafe { event.characters() } {
            for character in characters.to_string().chars() {
                let code = character as u32;
                let is_function_placeholder = (0xF700..=0xF8FF).contains(&code);
                if (!character.is_control() || character == '\t') && !is_function_placeholder {
                    io.add_input_character(character);
                }
            }
        }
    }

    io.want_capture_keyboard()
}

/// Re-sync modifier keys from an `NSEventModifierFlags` mask.
///
/// AppKit reports only the generic per-modifier bits through the stable API,
/// so the left and right keys of each pair are set to the same state.
pub fn handle_flags_changed(imgui_ctx: &mut Context, flags: u64) {
    let modifiers = translate_modifiers(flags);
    let io = imgui_ctx.io_mut();

    io.add_key_event(Key::LeftShift, modifiers.shift);
    io.add_key_event(Key::RightShift, modifiers.shift);
    io.add_key_event(Key::LeftCtrl, modifiers.control);
    io.add_key_event(Key::RightCtrl, modifiers.control);
    io.add_key_event(Key::LeftAlt, modifiers.option);
    io.add_key_event(Key::RightAlt, modifiers.option);
    io.add_key_event(Key::LeftSuper, modifiers.command);
    io.add_key_event(Key::RightSuper, modifiers.command);
}

/// Handle the application gaining or losing focus.
///
/// The IO wrapper has no dedicated focus entry point; focus loss releases the
/// modifier keys and parks the mouse so no hover or modifier state survives
/// the gap.
pub fn handle_focus(imgui_ctx: &mut Context, focused: bool) {
    if !focused {
        handle_flags_changed(imgui_ctx, 0);
        imgui_ctx
            .io_mut()
            .add_mouse_pos_event([-f32::MAX, -f32::MAX]);
    }
}
