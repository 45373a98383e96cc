//! Texture-atlas skin patches.
//!
//! A skin patch maps a pixel region of a texture atlas onto destination
//! rectangles through a [`SkinRenderer`]. [`Bordered`] is the nine-slice
//! patch used for frames and buttons; [`Single`] draws one region as is.

mod bordered;
mod single;

pub use bordered::Bordered;
pub use single::Single;

use crate::layout::Rect;
use crate::style::Color;

/// A texture known to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Texture {
    /// Renderer-side handle.
    pub id: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Texture {
    /// Creates a texture handle.
    #[must_use]
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// True once the texture has pixel data. Patches on an unloaded texture
    /// draw nothing.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Normalized texture coordinates of a sub-rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UvRect {
    /// Left.
    pub u0: f32,
    /// Top.
    pub v0: f32,
    /// Right.
    pub u1: f32,
    /// Bottom.
    pub v1: f32,
}

impl UvRect {
    /// Creates UVs from their four edges.
    #[must_use]
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// UVs of a pixel region of `texture`. An unloaded texture yields zeros.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_pixels(texture: &Texture, x: i32, y: i32, width: i32, height: i32) -> Self {
        if !texture.is_loaded() {
            return Self::default();
        }
        let tw = texture.width as f32;
        let th = texture.height as f32;
        Self::new(
            x as f32 / tw,
            y as f32 / th,
            (x + width) as f32 / tw,
            (y + height) as f32 / th,
        )
    }

    /// `[u0, v0, u1, v1]`.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.u0, self.v0, self.u1, self.v1]
    }
}

/// The drawing primitives a skin patch needs.
pub trait SkinRenderer {
    /// Sets the tint multiplied into subsequent quads.
    fn set_draw_color(&mut self, color: Color);

    /// Draws the `uv` region of `texture` stretched over `rect`.
    fn draw_textured_rect(&mut self, texture: &Texture, rect: Rect, uv: UvRect);
}
