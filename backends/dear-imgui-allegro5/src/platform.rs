//! Platform layer of the Allegro 5 backend
//!
//! Owns the per-context native state (display handle, invisible cursor,
//! cursor cache, frame clock) and dispatches Allegro events into the IO event
//! queue.

use std::ptr;

use allegro::{Display, Event};
use allegro_sys::{ALLEGRO_DISPLAY, ALLEGRO_MOUSE_CURSOR};
use dear_imgui_rs::{BackendFlags, ConfigFlags, Context, Ui};
use log::debug;

use crate::clipboard::AllegroClipboard;
use crate::cursor::CursorSettings;
use crate::error::{InitError, InitResult};
use crate::events;

/// Platform backend connecting Allegro 5 input and display state to Dear ImGui
pub struct AllegroPlatform {
    display: *mut ALLEGRO_DISPLAY,
    time: f64,
    cursor_invisible: *mut ALLEGRO_MOUSE_CURSOR,
    cursor_cache: Option<CursorSettings>,
}

impl AllegroPlatform {
    /// Create the platform backend for a display.
    ///
    /// Sets the backend capability flags and platform name, installs the
    /// Allegro clipboard, and creates the invisible mouse cursor used to
    /// implement `MouseCursor::None`.
    pub fn new(imgui_ctx: &mut Context, display: &Display) -> InitResult<Self> {
        let raw_display = display.get_allegro_display();

        let _ = imgui_ctx.set_platform_name(Some(format!(
            "dear-imgui-allegro5 {}",
            env!("CARGO_PKG_VERSION")
        )));

        let io = imgui_ctx.io_mut();
        let mut backend_flags = io.backend_flags();
        backend_flags.insert(BackendFlags::HAS_MOUSE_CURSORS);
        io.set_backend_flags(backend_flags);
        io.set_mouse_pos([-f32::MAX, -f32::MAX]);

        imgui_ctx.set_clipboard_backend(AllegroClipboard::new(raw_display));

        // An actually invisible cursor; al_hide_mouse_cursor interferes with
        // mouse input on some drivers.
        let cursor_invisible = unsafe {
            let bitmap = allegro_sys::al_create_bitmap(8, 8);
            if bitmap.is_null() {
                return Err(InitError::CreateMouseCursor);
            }
            let cursor = allegro_sys::al_create_mouse_cursor(bitmap, 0, 0);
            allegro_sys::al_destroy_bitmap(bitmap);
            if cursor.is_null() {
                return Err(InitError::CreateMouseCursor);
            }
            cursor
        };

        debug!("initialized Allegro 5 platform backend");

        Ok(Self {
            display: raw_display,
            time: 0.0,
            cursor_invisible,
            cursor_cache: None,
        })
    }

    /// Refresh per-frame IO state. Call before `Context::frame`.
    ///
    /// Display size is re-read every frame to pick up window resizes, and the
    /// time step comes from the Allegro clock (first frame assumes 60 Hz).
    pub fn new_frame(&mut self, imgui_ctx: &mut Context, display: &Display) {
        let (w, h) = (display.get_width(), display.get_height());
        let io = imgui_ctx.io_mut();
        io.set_display_size([w as f32, h as f32]);

        let now = unsafe { allegro_sys::al_get_time() };
        let delta = if self.time > 0.0 {
            (now - self.time) as f32
        } else {
            1.0 / 60.0
        };
        io.set_delta_time(delta);
        self.time = now;
    }

    /// Apply the cursor shape requested by the UI. Call between building the
    /// UI and rendering, with the frame's `Ui` handle.
    pub fn prepare_render(&mut self, ui: &Ui) {
        if ui
            .io()
            .config_flags()
            .contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE)
        {
            return;
        }

        let cursor = CursorSettings {
            cursor: ui.mouse_cursor(),
        };
        if self.cursor_cache != Some(cursor) {
            cursor.apply(self.display, self.cursor_invisible);
            self.cursor_cache = Some(cursor);
        }
    }

    /// Translate one Allegro event into IO updates.
    ///
    /// Returns true when the GUI wants the event (capture flags); the caller
    /// should then skip its own handling of that input. Events carrying a
    /// display handle are ignored unless they target this backend's display.
    pub fn handle_event(&mut self, imgui_ctx: &mut Context, event: &Event) -> bool {
        match event {
            Event::MouseAxes {
                x, y, dz, dw, display, ..
            } => {
                if *display == self.display {
                    return events::handle_mouse_axes(imgui_ctx, *x, *y, *dz, *dw);
                }
                false
            }
            Event::MouseButtonDown {
                button, display, ..
            } => {
                if *display == self.display {
                    return events::handle_mouse_button(imgui_ctx, *button, true);
                }
                false
            }
            Event::MouseButtonUp {
                button, display, ..
            } => {
                if *display == self.display {
                    return events::handle_mouse_button(imgui_ctx, *button, false);
                }
                false
            }
            Event::MouseLeaveDisplay { display, .. } => {
                if *display == self.display {
                    events::handle_mouse_left_display(imgui_ctx);
                }
                false
            }
            Event::KeyChar {
                unichar, display, ..
            } => {
                if *display == self.display && *unichar != '\0' {
                    events::handle_key_char(imgui_ctx, *unichar);
                    return imgui_ctx.io().want_capture_keyboard();
                }
                false
            }
            Event::KeyDown {
                keycode, display, ..
            } => {
                if *display == self.display {
                    return events::handle_key(imgui_ctx, *keycode, true);
                }
                false
            }
            Event::KeyUp {
                keycode, display, ..
            } => {
                if *display == self.display {
                    return events::handle_key(imgui_ctx, *keycode, false);
                }
                false
            }
            Event::DisplaySwitchOut { source, .. } => {
                if *source == self.display {
                    events::handle_display_switch(imgui_ctx, false);
                }
                false
            }
            Event::DisplaySwitchIn { source, .. } => {
                if *source == self.display {
                    events::handle_display_switch(imgui_ctx, true);
                }
                false
            }
            _ => false,
        }
    }
}

impl Drop for AllegroPlatform {
    fn drop(&mut self) {
        if !self.cursor_invisible.is_null() {
            unsafe { allegro_sys::al_destroy_mouse_cursor(self.cursor_invisible) };
            self.cursor_invisible = ptr::null_mut();
        }
        debug!("shut down Allegro 5 platform backend");
    }
}
