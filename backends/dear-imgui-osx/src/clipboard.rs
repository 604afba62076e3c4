//! System pasteboard integration for the macOS backend

use dear_imgui_rs::ClipboardBackend;
use objc2_app_kit::{NSPasteboard, NSPasteboardTypeString};
use objc2_foundation::NSString;

/// Clipboard backend backed by the general `NSPasteboard`.
pub struct PasteboardClipboard;

impl ClipboardBackend for PasteboardClipboard {
    fn get(&mut self) -> Option<String> {
        unsafe {
            let pasteboard = NSPasteboard::generalPasteboard();
            let value = pasteboard.stringForType(NSPasteboardTypeString)?;
            Some(value.to_string())
        }
    }

    fn set(&mut self, value: &str) {
        unsafe {
            let pasteboard = NSPasteboard::generalPasteboard();
            pasteboard.clearContents();
            pasteboard.setString_forType(&NSString::from_str(value), NSPasteboardTypeString);
        }
    }
}
