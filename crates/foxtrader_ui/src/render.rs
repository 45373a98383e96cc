//! UI rendering system.
//!
//! Skin patches draw into a [`UIRenderer`], which records textured quads for
//! the frame and groups consecutive quads sharing a texture into batches
//! ready for GPU submission.

use crate::layout::Rect;
use crate::skin::{SkinRenderer, Texture, UvRect};
use crate::style::Color;

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Textured quad.
    Texture {
        /// Bounds.
        bounds: Rect,
        /// Texture ID.
        texture_id: u32,
        /// UV coordinates (u0, v0, u1, v1).
        uv: [f32; 4],
        /// Tint color.
        color: Color,
    },
}

/// Consecutive commands drawn with the same texture.
#[derive(Debug, Clone, PartialEq)]
pub struct UIBatch {
    /// Texture bound for the whole batch.
    pub texture_id: u32,
    /// Commands in this batch.
    pub commands: Vec<RenderCommand>,
}

impl UIBatch {
    /// Creates a new empty batch.
    #[must_use]
    pub fn new(texture_id: u32) -> Self {
        Self {
            texture_id,
            commands: Vec::with_capacity(64),
        }
    }

    /// Expands every quad into two triangles.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn vertices(&self) -> Vec<UIVertex> {
        let mut out = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            let RenderCommand::Texture {
                bounds, uv, color, ..
            } = command;
            let [u0, v0, u1, v1] = *uv;
            let color = color.to_array();
            let (x0, y0) = (bounds.x as f32, bounds.y as f32);
            let (x1, y1) = (bounds.right() as f32, bounds.bottom() as f32);

            let top_left = UIVertex::new(x0, y0, u0, v0, color);
            let top_right = UIVertex::new(x1, y0, u1, v0, color);
            let bottom_left = UIVertex::new(x0, y1, u0, v1, color);
            let bottom_right = UIVertex::new(x1, y1, u1, v1, color);
            out.extend_from_slice(&[
                top_left,
                bottom_left,
                top_right,
                top_right,
                bottom_left,
                bottom_right,
            ]);
        }
        out
    }
}

/// UI renderer that collects and batches commands.
#[derive(Debug)]
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Tint applied to quads drawn from now on.
    draw_color: Color,
    /// Final batches for rendering.
    batches: Vec<UIBatch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(4096),
            draw_color: Color::WHITE,
            batches: Vec::with_capacity(64),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.batches.clear();
        self.draw_color = Color::WHITE;
    }

    /// Current tint.
    #[must_use]
    pub const fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// Commands recorded so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Ends the frame and returns batches for rendering.
    pub fn end_frame(&mut self) -> &[UIBatch] {
        self.batches.clear();
        for command in self.commands.drain(..) {
            let RenderCommand::Texture { texture_id, .. } = command;
            match self.batches.last_mut() {
                Some(batch) if batch.texture_id == texture_id => batch.commands.push(command),
                _ => {
                    let mut batch = UIBatch::new(texture_id);
                    batch.commands.push(command);
                    self.batches.push(batch);
                }
            }
        }

        tracing::trace!(batches = self.batches.len(), "ui frame batched");
        &self.batches
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinRenderer for UIRenderer {
    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_textured_rect(&mut self, texture: &Texture, rect: Rect, uv: UvRect) {
        self.commands.push(RenderCommand::Texture {
            bounds: rect,
            texture_id: texture.id,
            uv: uv.to_array(),
            color: self.draw_color,
        });
    }
}

/// Vertex for UI rendering.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UIVertex {
    /// Position (x, y).
    pub position: [f32; 2],
    /// UV coordinates.
    pub uv: [f32; 2],
    /// Color (RGBA).
    pub color: [f32; 4],
}

impl UIVertex {
    /// Creates a new vertex.
    #[must_use]
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
            color,
        }
    }
}
