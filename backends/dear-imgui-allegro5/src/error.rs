//! Error types for the Allegro 5 backend

use thiserror::Error;

/// Errors that can occur while creating backend objects
#[derive(Error, Debug)]
pub enum InitError {
    /// Failed to create the font atlas bitmap
    #[error("Failed to create font atlas bitmap ({width}x{height})")]
    CreateFontTexture { width: i32, height: i32 },

    /// Failed to lock the font atlas bitmap for the pixel upload
    #[error("Failed to lock font atlas bitmap for upload")]
    LockFontTexture,

    /// The font atlas produced no texture data to upload
    #[error("Font atlas has no texture data")]
    MissingFontData,

    /// Failed to create the custom vertex declaration
    #[error("Failed to create vertex declaration")]
    CreateVertexDecl,

    /// Failed to create the invisible mouse cursor
    #[error("Failed to create invisible mouse cursor")]
    CreateMouseCursor,
}

/// Errors that can occur during rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// Device objects were invalidated and not recreated
    #[error("Renderer device objects were destroyed")]
    RendererDestroyed,
}

/// Result type for initialization operations
pub type InitResult<T> = Result<T, InitError>;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InitError::CreateFontTexture {
            width: 512,
            height: 64,
        };
        assert_eq!(
            err.to_string(),
            "Failed to create font atlas bitmap (512x64)"
        );
        assert_eq!(
            RenderError::RendererDestroyed.to_string(),
            "Renderer device objects were destroyed"
        );
    }
}
