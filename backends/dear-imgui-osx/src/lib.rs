//! macOS (Cocoa) platform backend for Dear ImGui
//!
//! This crate feeds AppKit input into Dear ImGui: `NSEvent` translation,
//! per-frame display state (view size, backing scale factor, time step),
//! mouse cursor shapes, and the system pasteboard. It is a platform backend
//! only; rendering is left to a separate renderer backend (Metal, OpenGL,
//! WGPU) driven by the same `Context`.
//!
//! On platforms other than macOS the crate builds to nothing, so it can stay
//! an unconditional dependency of cross-platform applications.
//!
//! # Example
//!
//! ```rust,ignore
//! use dear_imgui_rs::Context;
//! use dear_imgui_osx::OsxPlatform;
//!
//! let mut imgui = Context::create_or_panic();
//! let mut platform = OsxPlatform::new(&mut imgui);
//!
//! // For every NSEvent delivered to the view:
//! // platform.handle_event(&mut imgui, &event, &view);
//! //
//! // Each frame, before building the UI:
//! // platform.new_frame(&mut imgui, &view);
//! ```

#[cfg(target_os = "macos")]
mod clipboard;
#[cfg(target_os = "macos")]
mod cursor;
#[cfg(target_os = "macos")]
mod events;
#[cfg(target_os = "macos")]
mod input;
#[cfg(target_os = "macos")]
mod platform;

#[cfg(target_os = "macos")]
pub use platform::OsxPlatform;
