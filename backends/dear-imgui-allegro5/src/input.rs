//! Input mapping between Allegro and Dear ImGui
//!
//! Pure translation tables from Allegro keycodes and mouse button numbers to
//! Dear ImGui's input identifiers.

use allegro::KeyCode;
use dear_imgui_rs::{Key, input::MouseButton as ImGuiMouseButton};

/// Convert an Allegro mouse button number to a Dear ImGui mouse button.
///
/// Allegro numbers buttons from 1. Buttons beyond the first three have no
/// counterpart in the IO mouse button set and are dropped.
pub fn to_imgui_mouse_button(button: u32) -> Option<ImGuiMouseButton> {
    match button {
        1 => Some(ImGuiMouseButton::Left),
        2 => Some(ImGuiMouseButton::Right),
        3 => Some(ImGuiMouseButton::Middle),
        _ => None,
    }
}

/// Convert an Allegro keycode to a Dear ImGui key.
pub fn allegro_key_to_imgui_key(keycode: KeyCode) -> Option<Key> {
    match keycode {
        // Navigation
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Left => Some(Key::LeftArrow),
        KeyCode::Right => Some(Key::RightArrow),
        KeyCode::Up => Some(Key::UpArrow),
        KeyCode::Down => Some(Key::DownArrow),
        KeyCode::PgUp => Some(Key::PageUp),
        KeyCode::PgDn => Some(Key::PageDown),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),

        // Editing
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Space => Some(Key::Space),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Escape => Some(Key::Escape),

        // Punctuation
        KeyCode::Quote => Some(Key::Apostrophe),
        KeyCode::Comma => Some(Key::Comma),
        KeyCode::Minus => Some(Key::Minus),
        KeyCode::Fullstop => Some(Key::Period),
        KeyCode::Slash => Some(Key::Slash),
        KeyCode::Semicolon => Some(Key::Semicolon),
        KeyCode::Equals => Some(Key::Equal),
        KeyCode::Openbrace => Some(Key::LeftBracket),
        KeyCode::Backslash => Some(Key::Backslash),
        KeyCode::Closebrace => Some(Key::RightBracket),
        KeyCode::Tilde => Some(Key::GraveAccent),

        // Locks and system keys
        KeyCode::CapsLock => Some(Key::CapsLock),
        KeyCode::ScrollLock => Some(Key::ScrollLock),
        KeyCode::NumLock => Some(Key::NumLock),
        KeyCode::PrintScreen => Some(Key::PrintScreen),
        KeyCode::Pause => Some(Key::Pause),
        KeyCode::Menu => Some(Key::Menu),

        // Keypad
        KeyCode::Pad0 => Some(Key::Keypad0),
        KeyCode::Pad1 => Some(Key::Keypad1),
        KeyCode::Pad2 => Some(Key::Keypad2),
        KeyCode::Pad3 => Some(Key::Keypad3),
        KeyCode::Pad4 => Some(Key::Keypad4),
        KeyCode::Pad5 => Some(Key::Keypad5),
        KeyCode::Pad6 => Some(Key::Keypad6),
        KeyCode::Pad7 => Some(Key::Keypad7),
        KeyCode::Pad8 => Some(Key::Keypad8),
        KeyCode::Pad9 => Some(Key::Keypad9),
        KeyCode::PadDelete => Some(Key::KeypadDecimal),
        KeyCode::PadSlash => Some(Key::KeypadDivide),
        KeyCode::PadAsterisk => Some(Key::KeypadMultiply),
        KeyCode::PadMinus => Some(Key::KeypadSubtract),
        KeyCode::PadPlus => Some(Key::KeypadAdd),
        KeyCode::PadEnter => Some(Key::KeypadEnter),
        KeyCode::PadEquals => Some(Key::KeypadEqual),

        // Modifiers. Allegro reports the left Alt key as plain Alt and the
        // right one as AltGr.
        KeyCode::LShift => Some(Key::LeftShift),
        KeyCode::LCtrl => Some(Key::LeftCtrl),
        KeyCode::Alt => Some(Key::LeftAlt),
        KeyCode::LWin => Some(Key::LeftSuper),
        KeyCode::RShift => Some(Key::RightShift),
        KeyCode::RCtrl => Some(Key::RightCtrl),
        KeyCode::AltGr => Some(Key::RightAlt),
        KeyCode::RWin => Some(Key::RightSuper),

        // Digits
        KeyCode::Num0 => Some(Key::Key0),
        KeyCode::Num1 => Some(Key::Key1),
        KeyCode::Num2 => Some(Key::Key2),
        KeyCode::Num3 => Some(Key::Key3),
        KeyCode::Num4 => Some(Key::Key4),
        KeyCode::Num5 => Some(Key::Key5),
        KeyCode::Num6 => Some(Key::Key6),
        KeyCode::Num7 => Some(Key::Key7),
        KeyCode::Num8 => Some(Key::Key8),
        KeyCode::Num9 => Some(Key::Key9),

        // Letters
        KeyCode::A => Some(Key::A),
        KeyCode::B => Some(Key::B),
        KeyCode::C => Some(Key::C),
        KeyCode::D => Some(Key::D),
        KeyCode::E => Some(Key::E),
        KeyCode::F => Some(Key::F),
        KeyCode::G => Some(Key::G),
        KeyCode::H => Some(Key::H),
        KeyCode::I => Some(Key::I),
        KeyCode::J => Some(Key::J),
        KeyCode::K => Some(Key::K),
        KeyCode::L => Some(Key::L),
        KeyCode::M => Some(Key::M),
        KeyCode::N => Some(Key::N),
        KeyCode::O => Some(Key::O),
        KeyCode::P => Some(Key::P),
        KeyCode::Q => Some(Key::Q),
        KeyCode::R => Some(Key::R),
        KeyCode::S => Some(Key::S),
        KeyCode::T => Some(Key::T),
        KeyCode::U => Some(Key::U),
        KeyCode::V => Some(Key::V),
        KeyCode::W => Some(Key::W),
        KeyCode::X => Some(Key::X),
        KeyCode::Y => Some(Key::Y),
        KeyCode::Z => Some(Key::Z),

        // Function keys
        KeyCode::F1 => Some(Key::F1),
        KeyCode::F2 => Some(Key::F2),
        KeyCode::F3 => Some(Key::F3),
        KeyCode::F4 => Some(Key::F4),
        KeyCode::F5 => Some(Key::F5),
        KeyCode::F6 => Some(Key::F6),
        KeyCode::F7 => Some(Key::F7),
        KeyCode::F8 => Some(Key::F8),
        KeyCode::F9 => Some(Key::F9),
        KeyCode::F10 => Some(Key::F10),
        KeyCode::F11 => Some(Key::F11),
        KeyCode::F12 => Some(Key::F12),

        _ => None,
    }
}

/// Whether a keycode participates in the modifier release performed when the
/// display loses focus.
pub(crate) const MODIFIER_KEYS: [Key; 8] = [
    Key::LeftShift,
    Key::RightShift,
    Key::LeftCtrl,
    Key::RightCtrl,
    Key::LeftAlt,
    Key::RightAlt,
    Key::LeftSuper,
    Key::RightSuper,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(to_imgui_mouse_button(1), Some(ImGuiMouseButton::Left));
        assert_eq!(to_imgui_mouse_button(2), Some(ImGuiMouseButton::Right));
        assert_eq!(to_imgui_mouse_button(3), Some(ImGuiMouseButton::Middle));
        assert_eq!(to_imgui_mouse_button(4), None);
        assert_eq!(to_imgui_mouse_button(0), None);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(allegro_key_to_imgui_key(KeyCode::A), Some(Key::A));
        assert_eq!(allegro_key_to_imgui_key(KeyCode::Num0), Some(Key::Key0));
        assert_eq!(allegro_key_to_imgui_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(
            allegro_key_to_imgui_key(KeyCode::PadEnter),
            Some(Key::KeypadEnter)
        );
        assert_eq!(
            allegro_key_to_imgui_key(KeyCode::Tilde),
            Some(Key::GraveAccent)
        );
    }

    #[test]
    fn test_alt_keys_map_left_and_right() {
        assert_eq!(allegro_key_to_imgui_key(KeyCode::Alt), Some(Key::LeftAlt));
        assert_eq!(
            allegro_key_to_imgui_key(KeyCode::AltGr),
            Some(Key::RightAlt)
        );
    }
}
