//! Nine-slice patch.
//!
//! The source region is cut by its margin into a 3x3 grid:
//!
//! ```text
//!   0 | 1 | 2      corners (0, 2, 6, 8) keep their pixel size,
//!  ---+---+---     edges (1, 7) stretch horizontally,
//!   3 | 4 | 5      edges (3, 5) stretch vertically,
//!  ---+---+---     the centre (4) stretches both ways.
//!   6 | 7 | 8
//! ```

use super::{SkinRenderer, Texture, UvRect};
use crate::config::SkinConfig;
use crate::layout::{Margin, Rect};
use crate::style::Color;

/// A texture region drawn as nine slices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bordered {
    texture: Texture,
    slices: [UvRect; 9],
    /// Corner sizes on screen, after the draw-margin scale.
    margin: Margin,
    width: i32,
    height: i32,
}

impl Bordered {
    /// Slices `source` of `texture` by `margin`. UVs always use the source
    /// margin; corners are drawn at `margin * draw_margin_scale`.
    #[must_use]
    pub fn new(texture: Texture, source: Rect, margin: Margin, draw_margin_scale: f32) -> Self {
        let (xs, widths) = spans(source.x, source.width, margin.left, margin.right);
        let (ys, heights) = spans(source.y, source.height, margin.top, margin.bottom);

        let mut slices = [UvRect::default(); 9];
        for (index, slice) in slices.iter_mut().enumerate() {
            let (row, column) = (index / 3, index % 3);
            *slice = UvRect::from_pixels(&texture, xs[column], ys[row], widths[column], heights[row]);
        }

        Self {
            texture,
            slices,
            margin: margin.scaled(draw_margin_scale),
            width: source.width,
            height: source.height,
        }
    }

    /// Like [`Bordered::new`], taking the scale from the `[skin]` section.
    #[must_use]
    pub fn with_config(texture: Texture, source: Rect, margin: Margin, config: &SkinConfig) -> Self {
        Self::new(texture, source, margin, config.draw_margin_scale)
    }

    /// UVs of slice `index` (0..9, row-major).
    #[must_use]
    pub fn slice(&self, index: usize) -> Option<UvRect> {
        self.slices.get(index).copied()
    }

    /// On-screen corner sizes.
    #[must_use]
    pub const fn draw_margin(&self) -> Margin {
        self.margin
    }

    /// Draws the patch over `rect`, tinted by `tint` (white when `None`).
    ///
    /// A destination smaller than the source on both axes gets one quad
    /// spanning the whole source, since the corners would not fit. Negative
    /// extents are treated as zero, and corners that do not fit are cut down
    /// so every quad stays inside `rect`.
    pub fn draw(&self, renderer: &mut impl SkinRenderer, rect: Rect, tint: Option<Color>) {
        if !self.texture.is_loaded() {
            return;
        }
        renderer.set_draw_color(tint.unwrap_or(Color::WHITE));

        let rect = rect.clamped();
        if rect.width < self.width && rect.height < self.height {
            let first = self.slices[0];
            let last = self.slices[8];
            let uv = UvRect::new(first.u0, first.v0, last.u1, last.v1);
            renderer.draw_textured_rect(&self.texture, rect, uv);
            return;
        }

        let m = self.margin;
        let (left, right) = fit(rect.width, m.left, m.right);
        let (top, bottom) = fit(rect.height, m.top, m.bottom);
        let (xs, widths) = spans(rect.x, rect.width, left, right);
        let (ys, heights) = spans(rect.y, rect.height, top, bottom);

        for (index, uv) in self.slices.iter().enumerate() {
            let (row, column) = (index / 3, index % 3);
            let quad = Rect::new(xs[column], ys[row], widths[column], heights[row]);
            renderer.draw_textured_rect(&self.texture, quad, *uv);
        }
    }
}

/// Shrinks border bands that do not fit in `length`, leading band first.
fn fit(length: i32, lead: i32, trail: i32) -> (i32, i32) {
    let lead = lead.clamp(0, length);
    (lead, trail.clamp(0, length - lead))
}

/// Splits `[start, start + length)` into a leading band, a middle band and a
/// trailing band. Returns the band origins and lengths.
fn spans(start: i32, length: i32, lead: i32, trail: i32) -> ([i32; 3], [i32; 3]) {
    (
        [start, start + lead, start + length - trail],
        [lead, length - lead - trail, trail],
    )
}
