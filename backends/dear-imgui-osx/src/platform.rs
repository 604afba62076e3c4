//! Main platform implementation for the macOS backend

use instant::Instant;

use dear_imgui_rs::{BackendFlags, ConfigFlags, Context, Ui};
use log::debug;
use objc2::msg_send;
use objc2_app_kit::{NSEvent, NSEventType, NSView};

use crate::clipboard::PasteboardClipboard;
use crate::cursor::CursorSettings;
use crate::events;

/// Platform backend connecting AppKit input and window state to Dear ImGui
///
/// The backend is driven from the application's event path: forward every
/// `NSEvent` the ImGui view receives to [`OsxPlatform::handle_event`], call
/// [`OsxPlatform::new_frame`] once per frame before building the UI, and
/// [`OsxPlatform::prepare_render`] with the frame's `Ui` before rendering.
/// Application activation changes (from the app delegate) go through
/// [`OsxPlatform::handle_focus`].
pub struct OsxPlatform {
    last_frame: Instant,
    cursor_cache: Option<CursorSettings>,
    cursor_hidden: bool,
}

impl OsxPlatform {
    /// Create the platform backend.
    ///
    /// Sets the backend capability flags and platform name, installs the
    /// pasteboard clipboard, and parks the mouse position until the first
    /// mouse event arrives.
    pub fn new(imgui_ctx: &mut Context) -> Self {
        let _ = imgui_ctx.set_platform_name(Some(format!(
            "dear-imgui-osx {}",
            env!("CARGO_PKG_VERSION")
        )));

        let io = imgui_ctx.io_mut();
        let mut backend_flags = io.backend_flags();
        backend_flags.insert(BackendFlags::HAS_MOUSE_CURSORS);
        io.set_backend_flags(backend_flags);
        io.set_mouse_pos([-f32::MAX, -f32::MAX]);

        imgui_ctx.set_clipboard_backend(PasteboardClipboard);

        debug!("initialized macOS platform backend");

        Self {
            last_frame: Instant::now(),
            cursor_cache: None,
            cursor_hidden: false,
        }
    }

    /// Refresh per-frame IO state from the ImGui view. Call before
    /// `Context::frame`.
    pub fn new_frame(&mut self, imgui_ctx: &mut Context, view: &NSView) {
        let bounds = view.bounds();
        let scale = view
            .window()
            .map(|window| window.backingScaleFactor())
            .unwrap_or(1.0);

        let io = imgui_ctx.io_mut();
        io.set_display_size([bounds.size.width as f32, bounds.size.height as f32]);
        io.set_display_framebuffer_scale([scale as f32, scale as f32]);

        let now = Instant::now();
        let delta = now - self.last_frame;
        io.set_delta_time(delta.as_secs_f32());
        self.last_frame = now;
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
            cursor.apply(&mut self.cursor_hidden);
            self.cursor_cache = Some(cursor);
        }
    }

    /// Translate one `NSEvent` into IO updates.
    ///
    /// Returns true when the GUI wants the event (capture flags); the caller
    /// should then skip its own handling of that input.
    pub fn handle_event(&mut self, imgui_ctx: &mut Context, event: &NSEvent, view: &NSView) -> bool {
        match event.r#type() {
            NSEventType::LeftMouseDown => events::handle_mouse_button(imgui_ctx, 0, true),
            NSEventType::LeftMouseUp => events::handle_mouse_button(imgui_ctx, 0, false),
            NSEventType::RightMouseDown => events::handle_mouse_button(imgui_ctx, 1, true),
            NSEventType::RightMouseUp => events::handle_mouse_button(imgui_ctx, 1, false),
            NSEventType::OtherMouseDown => {
                events::handle_mouse_button(imgui_ctx, event.buttonNumber(), true)
            }
            NSEventType::OtherMouseUp => {
                events::handle_mouse_button(imgui_ctx, event.buttonNumber(), false)
            }
            NSEventType::MouseMoved
            | NSEventType::LeftMouseDragged
            | NSEventType::RightMouseDragged
            | NSEventType::OtherMouseDragged => {
                events::handle_mouse_moved(imgui_ctx, event, view)
            }
            NSEventType::ScrollWheel => events::handle_scroll_wheel(imgui_ctx, event),
            NSEventType::KeyDown => events::handle_key(imgui_ctx, event, true),
            NSEventType::KeyUp => events::handle_key(imgui_ctx, event, false),
            NSEventType::FlagsChanged => {
                let flags: usize = unsafe { msg_send![event, modifierFlags] };
                events::handle_flags_changed(imgui_ctx, flags as u64);
                imgui_ctx.io().want_capture_keyboard()
            }
            _ => false,
        }
    }

    /// Notify the backend of application activation changes.
    ///
    /// Wire this to `applicationDidBecomeActive` / `applicationDidResignActive`
    /// in the app delegate.
    pub fn handle_focus(&mut self, imgui_ctx: &mut Context, focused: bool) {
        events::handle_focus(imgui_ctx, focused);
    }
}

impl Drop for OsxPlatform {
    fn drop(&mut self) {
        // Never leave the OS cursor hidden behind us
        if self.cursor_hidden {
            let settings = CursorSettings {
                cursor: Some(dear_imgui_rs::MouseCursor::Arrow),
            };
            settings.apply(&mut self.cursor_hidden);
        }
        debug!("shut down macOS platform backend");
    }
}
