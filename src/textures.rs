//! Particle sprite sources.
//!
//! Each particle is drawn as one textured quad. The sprite can come from
//! an image file (PNG or JPEG), raw RGBA bytes, or the built-in procedural
//! radial-falloff disc used when nothing else is configured.
//!
//! Uploading the sprite to the GPU is deferred: the renderer skips drawing
//! entirely until a sprite has been provided (see
//! [`Renderer::set_sprite`](crate::gpu::Renderer::set_sprite)).

use std::path::Path;

use crate::error::SpriteError;

/// Pixel data for the particle sprite.
#[derive(Debug, Clone)]
pub struct SpriteConfig {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SpriteConfig {
    /// Create a sprite from raw RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load a sprite from an image file (PNG or JPEG).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
        let bytes = std::fs::read(path.as_ref())?;
        let img = image::load_from_memory(&bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// The default sprite: a white disc fading out toward its edge.
    ///
    /// `size` is the sprite edge length in pixels.
    pub fn radial(size: u32) -> Self {
        let size = size.max(2);
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        let half = (size as f32 - 1.0) / 2.0;

        for y in 0..size {
            for x in 0..size {
                let dx = (x as f32 - half) / half;
                let dy = (y as f32 - half) / half;
                let dist = (dx * dx + dy * dy).sqrt();
                // Opaque core, smooth fade from half radius to the rim.
                let t = ((dist - 0.5) / 0.5).clamp(0.0, 1.0);
                let alpha = (1.0 - t * t * (3.0 - 2.0 * t)) * 255.0;
                data.extend_from_slice(&[255, 255, 255, alpha as u8]);
            }
        }

        Self {
            data,
            width: size,
            height: size,
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self::radial(64)
    }
}
