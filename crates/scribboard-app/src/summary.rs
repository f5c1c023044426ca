//! Text renderer: one line per painted element.

use peniko::Color;
use scribboard_core::{RenderContext, Renderer};

/// Renders a frame as plain text instead of pixels.
#[derive(Debug, Default)]
pub struct SummaryRenderer {
    lines: Vec<String>,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of the last built frame, in paint order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

impl Renderer for SummaryRenderer {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) {
        self.lines.clear();
        for item in ctx.items() {
            let bounds = item.element.shape().bounds();
            let mut line = format!(
                "{} {} ({:.1}, {:.1})-({:.1}, {:.1}) {} {}px",
                item.id(),
                item.element.kind(),
                bounds.x0,
                bounds.y0,
                bounds.x1,
                bounds.y1,
                hex(item.stroke),
                item.stroke_width,
            );
            if item.dash != [0.0, 0.0] {
                line.push_str(&format!(" dash {}/{}", item.dash[0], item.dash[1]));
            }
            if let Some(fill) = item.fill {
                line.push_str(&format!(" fill {}", hex(fill)));
            }
            if let Some(text) = item.element.shape().as_text() {
                line.push_str(&format!(" {:?}", text.content));
            } else if !item.is_ink() && item.path.elements().is_empty() {
                line.push_str(" (empty)");
            }
            if item.selected {
                line.push_str(" *");
            }
            log::trace!("{line}");
            self.lines.push(line);
        }
        if let Some(bounds) = ctx.selection_bounds() {
            log::trace!("Selection outline {bounds:?}");
        }
    }
}
