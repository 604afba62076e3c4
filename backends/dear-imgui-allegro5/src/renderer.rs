//! Draw-list renderer for the Allegro 5 backend

use std::mem::size_of;
use std::os::raw::{c_int, c_void};
use std::ptr;

use allegro_primitives::PrimitivesAddon;
use allegro_primitives_sys::{ALLEGRO_VERTEX_DECL, ALLEGRO_VERTEX_ELEMENT};
use allegro_sys::{ALLEGRO_BITMAP, ALLEGRO_TRANSFORM};
use dear_imgui_rs::render::DrawData;
use dear_imgui_rs::{Context as ImGuiContext, TextureFormat, TextureId};
use log::debug;

use crate::error::{InitError, InitResult, RenderError, RenderResult};
use crate::mesh::{AlVertex, unindex_draw_list};

/// Renderer for Dear ImGui draw data using the Allegro primitives addon
///
/// Owns the font atlas texture and the custom vertex declaration. Because
/// Allegro's indexed-draw path cannot be used, every draw list is de-indexed
/// into a scratch buffer before submission; see [`crate::mesh`].
pub struct AllegroRenderer {
    vertex_decl: *mut ALLEGRO_VERTEX_DECL,
    font_texture: *mut ALLEGRO_BITMAP,
    scratch: Vec<AlVertex>,
    is_destroyed: bool,
}

impl AllegroRenderer {
    /// Create the renderer and its device objects.
    ///
    /// Requires the primitives addon to be initialized; taking it by
    /// reference makes that a compile-time fact.
    pub fn new(imgui_ctx: &mut ImGuiContext, _primitives: &PrimitivesAddon) -> InitResult<Self> {
        let _ = imgui_ctx.set_renderer_name(Some(format!(
            "dear-imgui-allegro5 {}",
            env!("CARGO_PKG_VERSION")
        )));

        // A custom declaration with normalized texture coordinates
        // (ALLEGRO_PRIM_TEX_COORD, not _PIXEL): Dear ImGui emits normalized
        // UVs, and Allegro has no packed-color storage so colors are unpacked
        // floats in the vertex.
        let vertex_decl = unsafe {
            let elements = [
                ALLEGRO_VERTEX_ELEMENT {
                    attribute: allegro_primitives_sys::ALLEGRO_PRIM_POSITION as c_int,
                    storage: allegro_primitives_sys::ALLEGRO_PRIM_FLOAT_2 as c_int,
                    offset: memoffset::offset_of!(AlVertex, pos) as c_int,
                },
                ALLEGRO_VERTEX_ELEMENT {
                    attribute: allegro_primitives_sys::ALLEGRO_PRIM_TEX_COORD as c_int,
                    storage: allegro_primitives_sys::ALLEGRO_PRIM_FLOAT_2 as c_int,
                    offset: memoffset::offset_of!(AlVertex, uv) as c_int,
                },
                ALLEGRO_VERTEX_ELEMENT {
                    attribute: allegro_primitives_sys::ALLEGRO_PRIM_COLOR_ATTR as c_int,
                    storage: 0,
                    offset: memoffset::offset_of!(AlVertex, color) as c_int,
                },
                ALLEGRO_VERTEX_ELEMENT {
                    attribute: 0,
                    storage: 0,
                    offset: 0,
                },
            ];
            allegro_primitives_sys::al_create_vertex_decl(
                elements.as_ptr(),
                size_of::<AlVertex>() as c_int,
            )
        };
        if vertex_decl.is_null() {
            return Err(InitError::CreateVertexDecl);
        }

        let font_texture = match Self::create_font_texture(imgui_ctx) {
            Ok(texture) => texture,
            Err(err) => {
                unsafe { allegro_primitives_sys::al_destroy_vertex_decl(vertex_decl) };
                return Err(err);
            }
        };

        debug!("initialized Allegro 5 renderer backend");

        Ok(Self {
            vertex_decl,
            font_texture,
            scratch: Vec::new(),
            is_destroyed: false,
        })
    }

    /// Build the font atlas and upload it as an Allegro bitmap.
    ///
    /// The pixels go through a memory bitmap first and are then cloned into a
    /// video bitmap, which is the reliable upload path across Allegro drivers.
    fn create_font_texture(imgui_ctx: &mut ImGuiContext) -> InitResult<*mut ALLEGRO_BITMAP> {
        let mut fonts = imgui_ctx.fonts();
        fonts.build();

        let (pixels, width, height) = {
            let tex_data = fonts.tex_data_mut().ok_or(InitError::MissingFontData)?;
            let width = tex_data.width();
            let height = tex_data.height();
            let raw = tex_data.pixels().ok_or(InitError::MissingFontData)?;
            let rgba = match tex_data.format() {
                TextureFormat::RGBA32 => raw.to_vec(),
                TextureFormat::Alpha8 => {
                    let mut rgba = Vec::with_capacity(raw.len() * 4);
                    for &alpha in raw {
                        rgba.extend_from_slice(&[255, 255, 255, alpha]);
                    }
                    rgba
                }
            };
            (rgba, width, height)
        };

        let texture = unsafe {
            let flags = allegro_sys::al_get_new_bitmap_flags();
            let format = allegro_sys::al_get_new_bitmap_format();
            allegro_sys::al_set_new_bitmap_flags(
                allegro_sys::ALLEGRO_MEMORY_BITMAP as c_int
                    | allegro_sys::ALLEGRO_MIN_LINEAR as c_int
                    | allegro_sys::ALLEGRO_MAG_LINEAR as c_int,
            );
            allegro_sys::al_set_new_bitmap_format(
                allegro_sys::ALLEGRO_PIXEL_FORMAT_ABGR_8888_LE as c_int,
            );
            let staging = allegro_sys::al_create_bitmap(width, height);
            allegro_sys::al_set_new_bitmap_flags(flags);
            allegro_sys::al_set_new_bitmap_format(format);
            if staging.is_null() {
                return Err(InitError::CreateFontTexture { width, height });
            }

            let locked = allegro_sys::al_lock_bitmap(
                staging,
                allegro_sys::al_get_bitmap_format(staging),
                allegro_sys::ALLEGRO_LOCK_WRITEONLY as c_int,
            );
            if locked.is_null() {
                allegro_sys::al_destroy_bitmap(staging);
                return Err(InitError::LockFontTexture);
            }
            let row_bytes = width as usize * 4;
            let pitch = (*locked).pitch as isize;
            let base = (*locked).data as *mut u8;
            for row in 0..height as usize {
                ptr::copy_nonoverlapping(
                    pixels.as_ptr().add(row * row_bytes),
                    base.offset(row as isize * pitch),
                    row_bytes,
                );
            }
            allegro_sys::al_unlock_bitmap(staging);

            // Memory bitmap to video bitmap
            let texture = allegro_sys::al_clone_bitmap(staging);
            allegro_sys::al_destroy_bitmap(staging);
            if texture.is_null() {
                return Err(InitError::CreateFontTexture { width, height });
            }
            texture
        };

        fonts.set_texture_id(TextureId::from(texture));
        Ok(texture)
    }

    /// Recreate device objects after [`Self::invalidate_device_objects`].
    pub fn create_device_objects(&mut self, imgui_ctx: &mut ImGuiContext) -> InitResult<()> {
        if self.font_texture.is_null() {
            self.font_texture = Self::create_font_texture(imgui_ctx)?;
        }
        self.is_destroyed = false;
        Ok(())
    }

    /// Destroy the font atlas texture and detach it from the atlas.
    ///
    /// The renderer refuses to render until
    /// [`Self::create_device_objects`] rebuilds the texture.
    pub fn invalidate_device_objects(&mut self, imgui_ctx: &mut ImGuiContext) {
        if !self.font_texture.is_null() {
            imgui_ctx.fonts().set_texture_id(TextureId::null());
            unsafe { allegro_sys::al_destroy_bitmap(self.font_texture) };
            self.font_texture = ptr::null_mut();
        }
        self.is_destroyed = true;
    }

    /// Render a frame's draw data to the current target bitmap.
    pub fn render(&mut self, draw_data: &DrawData) -> RenderResult<()> {
        if self.is_destroyed {
            return Err(RenderError::RendererDestroyed);
        }

        // Avoid rendering when minimized
        let display_size = draw_data.display_size();
        if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
            return Ok(());
        }

        unsafe {
            // Back up the Allegro state this renderer touches
            let last_transform = ptr::read(allegro_sys::al_get_current_transform());
            let last_projection = ptr::read(allegro_sys::al_get_current_projection_transform());
            let (mut clip_x, mut clip_y, mut clip_w, mut clip_h) = (0, 0, 0, 0);
            allegro_sys::al_get_clipping_rectangle(
                &mut clip_x,
                &mut clip_y,
                &mut clip_w,
                &mut clip_h,
            );
            let (mut blend_op, mut blend_src, mut blend_dst) = (0, 0, 0);
            allegro_sys::al_get_blender(&mut blend_op, &mut blend_src, &mut blend_dst);

            self.setup_render_state(draw_data);
            self.render_draw_lists(draw_data);

            allegro_sys::al_set_blender(blend_op, blend_src, blend_dst);
            allegro_sys::al_set_clipping_rectangle(clip_x, clip_y, clip_w, clip_h);
            allegro_sys::al_use_transform(&last_transform);
            allegro_sys::al_use_projection_transform(&last_projection);
        }

        Ok(())
    }

    /// Blending and orthographic projection over the ImGui display rect.
    ///
    /// The blend equation keeps destination alpha intact so rendering into a
    /// transparent target stays composable.
    unsafe fn setup_render_state(&self, draw_data: &DrawData) {
        unsafe {
            allegro_sys::al_set_separate_blender(
                allegro_sys::ALLEGRO_ADD as c_int,
                allegro_sys::ALLEGRO_ALPHA as c_int,
                allegro_sys::ALLEGRO_INVERSE_ALPHA as c_int,
                allegro_sys::ALLEGRO_ADD as c_int,
                allegro_sys::ALLEGRO_ONE as c_int,
                allegro_sys::ALLEGRO_INVERSE_ALPHA as c_int,
            );

            let display_pos = draw_data.display_pos();
            let display_size = draw_data.display_size();
            let left = display_pos[0];
            let right = display_pos[0] + display_size[0];
            let top = display_pos[1];
            let bottom = display_pos[1] + display_size[1];

            let mut transform: ALLEGRO_TRANSFORM = std::mem::zeroed();
            allegro_sys::al_identity_transform(&mut transform);
            allegro_sys::al_use_transform(&transform);
            allegro_sys::al_orthographic_transform(
                &mut transform,
                left,
                top,
                1.0,
                right,
                bottom,
                -1.0,
            );
            allegro_sys::al_use_projection_transform(&transform);
        }
    }

    unsafe fn render_draw_lists(&mut self, draw_data: &DrawData) {
        let clip_off = draw_data.display_pos();

        for draw_list in draw_data.draw_lists() {
            unindex_draw_list(
                draw_list.vtx_buffer(),
                draw_list.idx_buffer(),
                &mut self.scratch,
            );

            let mut idx_offset = 0usize;
            for cmd in draw_list.commands() {
                let count = cmd.elem_count() as usize;
                if cmd.is_user_callback() {
                    // Raw callbacks are not representable through the safe
                    // draw-list wrapper.
                    debug!("skipping user callback draw command");
                    idx_offset += count;
                    continue;
                }

                let clip_rect = cmd.clip_rect();
                let clip_min = [clip_rect[0] - clip_off[0], clip_rect[1] - clip_off[1]];
                let clip_max = [clip_rect[2] - clip_off[0], clip_rect[3] - clip_off[1]];
                if clip_max[0] <= clip_min[0] || clip_max[1] <= clip_min[1] {
                    idx_offset += count;
                    continue;
                }

                let texture = {
                    let id = cmd.texture_id();
                    if id.is_null() {
                        self.font_texture
                    } else {
                        id.id() as *mut ALLEGRO_BITMAP
                    }
                };

                unsafe {
                    allegro_sys::al_set_clipping_rectangle(
                        clip_min[0] as c_int,
                        clip_min[1] as c_int,
                        (clip_max[0] - clip_min[0]) as c_int,
                        (clip_max[1] - clip_min[1]) as c_int,
                    );
                    allegro_primitives_sys::al_draw_prim(
                        self.scratch.as_ptr() as *const c_void,
                        self.vertex_decl,
                        texture,
                        idx_offset as c_int,
                        (idx_offset + count) as c_int,
                        allegro_primitives_sys::ALLEGRO_PRIM_TRIANGLE_LIST as c_int,
                    );
                }
                idx_offset += count;
            }
        }
    }
}

impl Drop for AllegroRenderer {
    fn drop(&mut self) {
        if !self.font_texture.is_null() {
            unsafe { allegro_sys::al_destroy_bitmap(self.font_texture) };
            self.font_texture = ptr::null_mut();
        }
        if !self.vertex_decl.is_null() {
            unsafe { allegro_primitives_sys::al_destroy_vertex_decl(self.vertex_decl) };
            self.vertex_decl = ptr::null_mut();
        }
        debug!("shut down Allegro 5 renderer backend");
    }
}
