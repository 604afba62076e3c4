//! Allegro 5 backend for Dear ImGui
//!
//! This crate connects Dear ImGui to the Allegro 5 multimedia library. It
//! covers both backend roles: [`AllegroPlatform`] feeds Allegro events and
//! per-frame display state into Dear ImGui's IO, and [`AllegroRenderer`]
//! draws the generated draw lists through the Allegro primitives addon.
//!
//! # Features
//!
//! - **Input**: mouse, keyboard, mouse wheel and (optionally) touch events
//! - **Clipboard**: system clipboard wired into Dear ImGui text widgets
//! - **Mouse cursors**: honors `Ui::mouse_cursor` via Allegro system cursors
//! - **Rendering**: user texture binding with `ALLEGRO_BITMAP` handles
//!
//! Allegro's indexed-draw path is not usable for this workload, so the
//! renderer de-indexes every draw list into a scratch vertex stream before
//! submitting it. This is slower than a true indexed renderer but matches
//! what the Allegro primitives API can reliably consume.
//!
//! # Example
//!
//! ```rust,no_run
//! use allegro::{Core, Display, EventQueue};
//! use allegro_primitives::PrimitivesAddon;
//! use dear_imgui_rs::Context;
//! use dear_imgui_allegro5::{AllegroPlatform, AllegroRenderer};
//!
//! let core = Core::init().unwrap();
//! let primitives = PrimitivesAddon::init(&core).unwrap();
//! let display = Display::new(&core, 1024, 768).unwrap();
//!
//! let mut imgui = Context::create_or_panic();
//! let mut platform = AllegroPlatform::new(&mut imgui, &display).unwrap();
//! let mut renderer = AllegroRenderer::new(&mut imgui, &primitives).unwrap();
//!
//! // Event loop:
//! // platform.handle_event(&mut imgui, &event);
//! // platform.new_frame(&mut imgui, &display);
//! // let ui = imgui.frame();
//! // ... build UI ...
//! // platform.prepare_render(ui);
//! // renderer.render(imgui.render()).unwrap();
//! ```

mod clipboard;
mod cursor;
mod error;
mod events;
mod input;
mod mesh;
mod platform;
mod renderer;

pub use error::*;
pub use mesh::AlVertex;
pub use platform::AllegroPlatform;
pub use renderer::AllegroRenderer;
