//! De-indexing of Dear ImGui draw lists into Allegro vertex streams
//!
//! Allegro's indexed primitive path cannot be used here (it is broken on the
//! DX9 driver), and its vertex formats store colors as unpacked floats. Each
//! draw list is therefore expanded through its index buffer into a flat
//! triangle-list stream, converting the packed 32-bit RGBA colors on the way.
//! Walking the 16-bit index buffer with native indexing also performs the
//! 16-to-32-bit widening the C API would otherwise require.

use allegro_sys::ALLEGRO_COLOR;
use dear_imgui_rs::render::{DrawIdx, DrawVert};

/// Vertex layout submitted to the Allegro primitives addon.
///
/// Matches the custom vertex declaration built by the renderer: two float
/// position components, two normalized texture coordinates, and an
/// `ALLEGRO_COLOR`. Normalized texture coordinates (`ALLEGRO_PRIM_TEX_COORD`)
/// are deliberate: Dear ImGui emits normalized UVs, so they pass through
/// without rescaling.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct AlVertex {
    /// Screen position
    pub pos: [f32; 2],
    /// Normalized texture coordinates
    pub uv: [f32; 2],
    /// Unpacked vertex color
    pub color: ALLEGRO_COLOR,
}

/// Unpack a Dear ImGui packed RGBA color into Allegro float components.
#[inline]
pub(crate) fn unpack_color(col: u32) -> ALLEGRO_COLOR {
    let c = col.to_le_bytes();
    ALLEGRO_COLOR {
        r: c[0] as f32 / 255.0,
        g: c[1] as f32 / 255.0,
        b: c[2] as f32 / 255.0,
        a: c[3] as f32 / 255.0,
    }
}

/// Expand an indexed vertex buffer into an unindexed triangle-list stream.
///
/// `out` is a reusable scratch buffer; it is cleared and refilled so the
/// allocation survives across frames. The output length always equals the
/// index buffer length, with `out[i]` built from `vertices[indices[i]]`.
pub(crate) fn unindex_draw_list(
    vertices: &[DrawVert],
    indices: &[DrawIdx],
    out: &mut Vec<AlVertex>,
) {
    out.clear();
    out.reserve(indices.len());
    for &idx in indices {
        let src = &vertices[idx as usize];
        out.push(AlVertex {
            pos: src.pos,
            uv: src.uv,
            color: unpack_color(src.col),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vert(x: f32, y: f32, col: u32) -> DrawVert {
        DrawVert {
            pos: [x, y],
            uv: [x / 100.0, y / 100.0],
            col,
        }
    }

    #[test]
    fn test_unpack_color_channels() {
        // Packed layout is R in the lowest byte, A in the highest
        let c = unpack_color(0xFF00_00FF);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);

        let c = unpack_color(0x8000_FF00);
        assert_eq!(c.r, 0.0);
        assert_eq!(c.g, 1.0);
        assert_eq!(c.b, 0.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_unindex_expands_shared_vertices() {
        // A quad: 4 vertices, 6 indices, two triangles sharing an edge
        let vertices = [
            vert(0.0, 0.0, 0xFF00_00FF),
            vert(10.0, 0.0, 0xFF00_00FF),
            vert(10.0, 10.0, 0xFF00_00FF),
            vert(0.0, 10.0, 0xFF00_00FF),
        ];
        let indices: [DrawIdx; 6] = [0, 1, 2, 0, 2, 3];

        let mut out = Vec::new();
        unindex_draw_list(&vertices, &indices, &mut out);

        assert_eq!(out.len(), indices.len());
        for (dst, &idx) in out.iter().zip(indices.iter()) {
            assert_eq!(dst.pos, vertices[idx as usize].pos);
            assert_eq!(dst.uv, vertices[idx as usize].uv);
        }
    }

    #[test]
    fn test_unindex_empty_is_empty() {
        let mut out = vec![AlVertex {
            pos: [1.0, 2.0],
            uv: [0.0, 0.0],
            color: unpack_color(0),
        }];
        unindex_draw_list(&[], &[], &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unindex_reuses_scratch_buffer() {
        let vertices = [vert(1.0, 2.0, 0xFFFF_FFFF); 3];
        let indices: [DrawIdx; 3] = [0, 1, 2];

        let mut out = Vec::with_capacity(64);
        unindex_draw_list(&vertices, &indices, &mut out);
        let cap = out.capacity();
        unindex_draw_list(&vertices, &indices, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out.capacity(), cap);
    }
}
