//! System clipboard integration for the Allegro 5 backend

use std::ffi::{CStr, CString};
use std::ptr;

use allegro_sys::ALLEGRO_DISPLAY;
use dear_imgui_rs::ClipboardBackend;

/// Clipboard backend backed by Allegro's clipboard API.
///
/// Clipboard access in Allegro is tied to a display, so the backend keeps the
/// raw display handle it was created for.
pub struct AllegroClipboard {
    display: *mut ALLEGRO_DISPLAY,
}

impl AllegroClipboard {
    pub fn new(display: *mut ALLEGRO_DISPLAY) -> Self {
        Self { display }
    }
}

impl ClipboardBackend for AllegroClipboard {
    fn get(&mut self) -> Option<String> {
        unsafe {
            let text = allegro_sys::al_get_clipboard_text(self.display);
            if text.is_null() {
                return None;
            }
            let value = CStr::from_ptr(text).to_string_lossy().into_owned();
            // The returned buffer is owned by Allegro's allocator
            allegro_sys::al_free_with_context(text.cast(), 0, ptr::null(), ptr::null());
            Some(value)
        }
    }

    fn set(&mut self, value: &str) {
        let Ok(text) = CString::new(value) else {
            return;
        };
        unsafe {
            allegro_sys::al_set_clipboard_text(self.display, text.as_ptr());
        }
    }
}
