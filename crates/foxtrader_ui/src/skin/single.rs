//! Single-region patch.

use super::{SkinRenderer, Texture, UvRect};
use crate::layout::Rect;
use crate::style::Color;

/// One texture region, stretched or drawn at native size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Single {
    texture: Texture,
    uv: UvRect,
    width: i32,
    height: i32,
}

impl Single {
    /// Wraps the `source` region of `texture`.
    #[must_use]
    pub fn new(texture: Texture, source: Rect) -> Self {
        Self {
            texture,
            uv: UvRect::from_pixels(&texture, source.x, source.y, source.width, source.height),
            width: source.width,
            height: source.height,
        }
    }

    /// Region UVs.
    #[must_use]
    pub const fn uv(&self) -> UvRect {
        self.uv
    }

    /// Native `(width, height)` in pixels.
    #[must_use]
    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Stretches the region over `rect`.
    pub fn draw(&self, renderer: &mut impl SkinRenderer, rect: Rect, tint: Option<Color>) {
        if !self.texture.is_loaded() {
            return;
        }
        renderer.set_draw_color(tint.unwrap_or(Color::WHITE));
        renderer.draw_textured_rect(&self.texture, rect.clamped(), self.uv);
    }

    /// Draws the region at native size, centred in `rect`. Odd leftovers
    /// round toward `rect`'s origin.
    pub fn draw_center(&self, renderer: &mut impl SkinRenderer, rect: Rect, tint: Option<Color>) {
        let x = rect.x + (rect.width - self.width) / 2;
        let y = rect.y + (rect.height - self.height) / 2;
        self.draw(renderer, Rect::new(x, y, self.width, self.height), tint);
    }
}
