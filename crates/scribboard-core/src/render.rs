//! The seam through which an external renderer reads the board.
//!
//! The core never draws. A [`Renderer`] walks the [`PaintItem`]s of a
//! [`RenderContext`] and hands each cached payload to its backend under the
//! camera transform.

use crate::canvas::Canvas;
use crate::shapes::{Element, ElementId, Shape};
use kurbo::{Affine, BezPath, Rect};
use peniko::Color;

/// Everything a backend needs to paint one element.
#[derive(Debug, Clone)]
pub struct PaintItem<'a> {
    pub element: &'a Element,
    /// Cached path, in world coordinates.
    pub path: &'a BezPath,
    pub stroke: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Dash and gap lengths; `[0, 0]` is solid.
    pub dash: [f64; 2],
    pub fill: Option<Color>,
    pub selected: bool,
}

impl PaintItem<'_> {
    pub fn id(&self) -> ElementId {
        self.element.id()
    }

    /// Freehand outlines are filled with the ink color rather than stroked.
    pub fn is_ink(&self) -> bool {
        matches!(self.element.shape(), Shape::Freehand(_))
    }
}

/// Context for rendering a frame.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Background color.
    pub background_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255),
        }
    }

    /// World-to-screen transform for the frame.
    pub fn transform(&self) -> Affine {
        self.canvas.camera.transform()
    }

    /// Elements in paint order.
    ///
    /// The text element behind an open text-entry surface is skipped so the
    /// surface does not draw over a stale copy.
    pub fn items(&self) -> impl Iterator<Item = PaintItem<'a>> + 'a {
        let canvas = self.canvas;
        let editing = canvas.text_entry().and_then(|entry| entry.editing);
        let selection = canvas.selection();
        canvas
            .elements()
            .iter()
            .filter(move |element| Some(element.id()) != editing)
            .map(move |element| {
                let style = element.shape().style();
                PaintItem {
                    element,
                    path: element.payload(),
                    stroke: style.stroke(),
                    stroke_width: style.stroke_px(),
                    dash: style.stroke_style.dash_pattern(),
                    fill: style.fill(),
                    selected: Some(element.id()) == selection,
                }
            })
    }

    /// Selection outline in world coordinates.
    pub fn selection_bounds(&self) -> Option<Rect> {
        self.canvas.selection_bounds()
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    fn build_scene(&mut self, ctx: &RenderContext<'_>);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext<'_>) -> Color {
        ctx.background_color
    }
}
