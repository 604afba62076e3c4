//! Mouse cursor management for the Allegro 5 backend
//!
//! Maps Dear ImGui cursor shapes onto Allegro system cursors and caches the
//! last applied shape to avoid redundant cursor calls.

use std::os::raw::c_int;

use allegro_sys::{ALLEGRO_DISPLAY, ALLEGRO_MOUSE_CURSOR};
use dear_imgui_rs::MouseCursor;

/// Cursor state cache to avoid unnecessary cursor changes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorSettings {
    pub cursor: Option<MouseCursor>,
}

impl CursorSettings {
    /// Apply the cursor shape to the display.
    ///
    /// `None` switches to the backend's invisible cursor instead of hiding
    /// the OS cursor; `al_hide_mouse_cursor` interferes with mouse input.
    pub fn apply(&self, display: *mut ALLEGRO_DISPLAY, invisible: *mut ALLEGRO_MOUSE_CURSOR) {
        unsafe {
            match self.cursor {
                Some(cursor) => {
                    allegro_sys::al_set_system_mouse_cursor(display, to_allegro_cursor(cursor));
                }
                None => {
                    allegro_sys::al_set_mouse_cursor(display, invisible);
                }
            }
        }
    }
}

/// Convert a Dear ImGui mouse cursor to an Allegro system cursor id.
pub fn to_allegro_cursor(cursor: MouseCursor) -> c_int {
    match cursor {
        MouseCursor::None => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_NONE as c_int,
        MouseCursor::Arrow => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_DEFAULT as c_int,
        MouseCursor::TextInput => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_EDIT as c_int,
        MouseCursor::ResizeAll => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_MOVE as c_int,
        MouseCursor::ResizeNS => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_RESIZE_N as c_int,
        MouseCursor::ResizeEW => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_RESIZE_E as c_int,
        MouseCursor::ResizeNESW => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_RESIZE_NE as c_int,
        MouseCursor::ResizeNWSE => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_RESIZE_NW as c_int,
        MouseCursor::Hand => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_LINK as c_int,
        MouseCursor::NotAllowed => allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_UNAVAILABLE as c_int,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_mapping() {
        assert_eq!(
            to_allegro_cursor(MouseCursor::Arrow),
            allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_DEFAULT as c_int
        );
        assert_eq!(
            to_allegro_cursor(MouseCursor::TextInput),
            allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_EDIT as c_int
        );
        assert_eq!(
            to_allegro_cursor(MouseCursor::NotAllowed),
            allegro_sys::ALLEGRO_SYSTEM_MOUSE_CURSOR_UNAVAILABLE as c_int
        );
    }

    #[test]
    fn test_cursor_settings_equality() {
        let arrow = CursorSettings {
            cursor: Some(MouseCursor::Arrow),
        };
        let hand = CursorSettings {
            cursor: Some(MouseCursor::Hand),
        };
        let hidden = CursorSettings { cursor: None };

        assert_eq!(
            arrow,
            CursorSettings {
                cursor: Some(MouseCursor::Arrow)
            }
        );
        assert_ne!(arrow, hand);
        assert_ne!(arrow, hidden);
    }
}
