//! Mouse cursor management for the macOS backend

use dear_imgui_rs::MouseCursor;
use objc2::rc::Retained;
use objc2_app_kit::NSCursor;

/// Cursor state cache to avoid redundant AppKit cursor calls
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorSettings {
    pub cursor: Option<MouseCursor>,
}

impl CursorSettings {
    /// Apply the cursor shape.
    ///
    /// `NSCursor` hide/unhide calls nest, so `hidden` tracks whether this
    /// backend currently holds a hide and only ever pushes one level.
    pub fn apply(&self, hidden: &mut bool) {
        match self.cursor {
            Some(cursor) => {
                if *hidden {
                    unsafe { NSCursor::unhide() };
                    *hidden = false;
                }
                to_ns_cursor(cursor).set();
            }
            None => {
                if !*hidden {
                    unsafe { NSCursor::hide() };
                    *hidden = true;
                }
            }
        }
    }
}

/// Convert a Dear ImGui mouse cursor to an AppKit cursor.
///
/// AppKit has no public diagonal resize cursors; the closest public shapes
/// are used for NESW/NWSE.
pub fn to_ns_cursor(cursor: MouseCursor) -> Retained<NSCursor> {
    match cursor {
        MouseCursor::None | MouseCursor::Arrow => NSCursor::arrowCursor(),
        MouseCursor::TextInput => NSCursor::IBeamCursor(),
        MouseCursor::ResizeAll => NSCursor::closedHandCursor(),
        MouseCursor::ResizeNS => NSCursor::resizeUpDownCursor(),
        MouseCursor::ResizeEW => NSCursor::resizeLeftRightCursor(),
        MouseCursor::ResizeNESW | MouseCursor::ResizeNWSE => NSCursor::crosshairCursor(),
        MouseCursor::Hand => NSCursor::pointingHandCursor(),
        MouseCursor::NotAllowed => NSCursor::operationNotAllowedCursor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_settings_equality() {
        let arrow = CursorSettings {
            cursor: Some(MouseCursor::Arrow),
        };
        let text = CursorSettings {
            cursor: Some(MouseCursor::TextInput),
        };
        let hidden = CursorSettings { cursor: None };

        assert_eq!(
            arrow,
            CursorSettings {
                cursor: Some(MouseCursor::Arrow)
            }
        );
        assert_ne!(arrow, text);
        assert_ne!(text, hidden);
    }
}
