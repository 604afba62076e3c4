//! Input mapping between AppKit and Dear ImGui
//!
//! Pure translation tables: macOS virtual keycodes and `NSEvent` modifier
//! masks to Dear ImGui's input identifiers.

use dear_imgui_rs::{Key, input::MouseButton as ImGuiMouseButton};

/// Generic modifier bits of `NSEventModifierFlags`.
const FLAG_CAPS_LOCK: u64 = 1 << 16;
const FLAG_SHIFT: u64 = 1 << 17;
const FLAG_CONTROL: u64 = 1 << 18;
const FLAG_OPTION: u64 = 1 << 19;
const FLAG_COMMAND: u64 = 1 << 20;

/// Modifier key state decoded from an `NSEvent` modifier mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub option: bool,
    pub command: bool,
    pub caps_lock: bool,
}

/// Decode the generic bits of an `NSEventModifierFlags` mask.
///
/// AppKit's device-dependent bits could distinguish left from right keys, but
/// they are not part of the stable API; both sides are reported together.
pub fn translate_modifiers(flags: u64) -> Modifiers {
    Modifiers {
        shift: flags & FLAG_SHIFT != 0,
        control: flags & FLAG_CONTROL != 0,
        option: flags & FLAG_OPTION != 0,
        command: flags & FLAG_COMMAND != 0,
        caps_lock: flags & FLAG_CAPS_LOCK != 0,
    }
}

/// Convert an AppKit mouse button number to a Dear ImGui mouse button.
pub fn to_imgui_mouse_button(button: isize) -> Option<ImGuiMouseButton> {
    match button {
        0 => Some(ImGuiMouseButton::Left),
        1 => Some(ImGuiMouseButton::Right),
        2 => Some(ImGuiMouseButton::Middle),
        _ => None,
    }
}

/// Convert a macOS virtual keycode to a Dear ImGui key.
///
/// The codes are the classic ANSI-layout virtual keycodes from Carbon's
/// `Events.h`; AppKit still reports them through `NSEvent.keyCode`.
pub fn keycode_to_imgui_key(keycode: u16) -> Option<Key> {
    match keycode {
        0x00 => Some(Key::A),
        0x01 => Some(Key::S),
        0x02 => Some(Key::D),
        0x03 => Some(Key::F),
        0x04 => Some(Key::H),
        0x05 => Some(Key::G),
        0x06 => Some(Key::Z),
        0x07 => Some(Key::X),
        0x08 => Some(Key::C),
        0x09 => Some(Key::V),
        0x0B => Some(Key::B),
        0x0C => Some(Key::Q),
        0x0D => Some(Key::W),
        0x0E => Some(Key::E),
        0x0F => Some(Key::R),
        0x10 => Some(Key::Y),
        0x11 => Some(Key::T),
        0x12 => Some(Key::Key1),
        0x13 => Some(Key::Key2),
        0x14 => Some(Key::Key3),
        0x15 => Some(Key::Key4),
        0x16 => Some(Key::Key6),
        0x17 => Some(Key::Key5),
        0x18 => Some(Key::Equal),
        0x19 => Some(Key::Key9),
        0x1A => Some(Key::Key7),
        0x1B => Some(Key::Minus),
        0x1C => Some(Key::Key8),
        0x1D => Some(Key::Key0),
        0x1E => Some(Key::RightBracket),
        0x1F => Some(Key::O),
        0x20 => Some(Key::U),
        0x21 => Some(Key::LeftBracket),
        0x22 => Some(Key::I),
        0x23 => Some(Key::P),
        0x24 => Some(Key::Enter),
        0x25 => Some(Key::L),
        0x26 => Some(Key::J),
        0x27 => Some(Key::Apostrophe),
        0x28 => Some(Key::K),
        0x29 => Some(Key::Semicolon),
        0x2A => Some(Key::Backslash),
        0x2B => Some(Key::Comma),
        0x2C => Some(Key::Slash),
        0x2D => Some(Key::N),
        0x2E => Some(Key::M),
        0x2F => Some(Key::Period),
        0x30 => Some(Key::Tab),
        0x31 => Some(Key::Space),
        0x32 => Some(Key::GraveAccent),
        0x33 => Some(Key::Backspace),
        0x35 => Some(Key::Escape),
        0x36 => Some(Key::RightSuper),
        0x37 => Some(Key::LeftSuper),
        0x38 => Some(Key::LeftShift),
        0x39 => Some(Key::CapsLock),
        0x3A => Some(Key::LeftAlt),
        0x3B => Some(Key::LeftCtrl),
        0x3C => Some(Key::RightShift),
        0x3D => Some(Key::RightAlt),
        0x3E => Some(Key::RightCtrl),
        0x41 => Some(Key::KeypadDecimal),
        0x43 => Some(Key::KeypadMultiply),
        0x45 => Some(Key::KeypadAdd),
        0x47 => Some(Key::NumLock),
        0x4B => Some(Key::KeypadDivide),
        0x4C => Some(Key::KeypadEnter),
        0x4E => Some(Key::KeypadSubtract),
        0x51 => Some(Key::KeypadEqual),
        0x52 => Some(Key::Keypad0),
        0x53 => Some(Key::Keypad1),
        0x54 => Some(Key::Keypad2),
        0x55 => Some(Key::Keypad3),
        0x56 => Some(Key::Keypad4),
        0x57 => Some(Key::Keypad5),
        0x58 => Some(Key::Keypad6),
        0x59 => Some(Key::Keypad7),
        0x5B => Some(Key::Keypad8),
        0x5C => Some(Key::Keypad9),
        0x60 => Some(Key::F5),
        0x61 => Some(Key::F6),
        0x62 => Some(Key::F7),
        0x63 => Some(Key::F3),
        0x64 => Some(Key::F8),
        0x65 => Some(Key::F9),
        0x67 => Some(Key::F11),
        // F13-F15 double as PrintScreen/ScrollLock/Pause on Apple keyboards
        0x69 => Some(Key::PrintScreen),
        0x6B => Some(Key::ScrollLock),
        0x6D => Some(Key::F10),
        0x6F => Some(Key::F12),
        0x71 => Some(Key::Pause),
        0x72 => Some(Key::Insert),
        0x73 => Some(Key::Home),
        0x74 => Some(Key::PageUp),
        0x75 => Some(Key::Delete),
        0x76 => Some(Key::F4),
        0x77 => Some(Key::End),
        0x78 => Some(Key::F2),
        0x79 => Some(Key::PageDown),
        0x7A => Some(Key::F1),
        0x7B => Some(Key::LeftArrow),
        0x7C => Some(Key::RightArrow),
        0x7D => Some(Key::DownArrow),
        0x7E => Some(Key::UpArrow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_translation() {
        assert_eq!(keycode_to_imgui_key(0x00), Some(Key::A));
        assert_eq!(keycode_to_imgui_key(0x24), Some(Key::Enter));
        assert_eq!(keycode_to_imgui_key(0x31), Some(Key::Space));
        assert_eq!(keycode_to_imgui_key(0x35), Some(Key::Escape));
        assert_eq!(keycode_to_imgui_key(0x7E), Some(Key::UpArrow));
        assert_eq!(keycode_to_imgui_key(0xFF), None);
    }

    #[test]
    fn test_button_translation() {
        assert_eq!(to_imgui_mouse_button(0), Some(ImGuiMouseButton::Left));
        assert_eq!(to_imgui_mouse_button(1), Some(ImGuiMouseButton::Right));
        assert_eq!(to_imgui_mouse_button(2), Some(ImGuiMouseButton::Middle));
        assert_eq!(to_imgui_mouse_button(5), None);
        assert_eq!(to_imgui_mouse_button(-1), None);
    }

    #[test]
    fn test_modifier_translation() {
        let mods = translate_modifiers(1 << 17);
        assert!(mods.shift);
        assert!(!mods.command);

        let mods = translate_modifiers((1 << 20) | (1 << 18));
        assert!(mods.command);
        assert!(mods.control);
        assert!(!mods.option);

        let mods = translate_modifiers(1 << 16);
        assert!(mods.caps_lock);
        assert_eq!(translate_modifiers(0), Modifiers::default());
    }
}
