//! Editor configuration: active tool, cursor and style pickers.

use crate::shapes::{
    FontFamily, SerializableColor, ShapeKind, ShapeStyle, StrokeStyle, StrokeWidth, Text,
};
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// Pointer cursor shown over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Default,
    Grab,
    Grabbing,
    Crosshair,
    NotAllowed,
    Text,
}

impl CursorStyle {
    /// CSS cursor name.
    pub fn name(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Grab => "grab",
            CursorStyle::Grabbing => "grabbing",
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::NotAllowed => "not-allowed",
            CursorStyle::Text => "text",
        }
    }
}

/// Editor-wide settings read when elements are created.
///
/// Loaded once from a config file and changed afterwards through setters.
/// The active tool is switched with [`crate::Canvas::set_tool`] so pending
/// text is committed first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    tool: ToolKind,
    cursor: CursorStyle,
    stroke_color: SerializableColor,
    stroke_width: StrokeWidth,
    stroke_style: StrokeStyle,
    /// `None` leaves closed shapes unfilled.
    fill_color: Option<SerializableColor>,
    font_family: FontFamily,
    font_size: f64,
    /// Maximum undo steps kept; `None` keeps everything.
    history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            cursor: ToolKind::default().cursor(),
            stroke_color: SerializableColor::ink(),
            stroke_width: StrokeWidth::default(),
            stroke_style: StrokeStyle::default(),
            fill_color: None,
            font_family: FontFamily::default(),
            font_size: Text::DEFAULT_FONT_SIZE,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn stroke_color(&self) -> SerializableColor {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> StrokeWidth {
        self.stroke_width
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.stroke_style
    }

    pub fn fill_color(&self) -> Option<SerializableColor> {
        self.fill_color
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Switch tool and reset the cursor to the tool's resting cursor.
    pub(crate) fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
        self.cursor = tool.cursor();
    }

    pub fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }

    pub fn set_stroke_color(&mut self, color: SerializableColor) {
        self.stroke_color = color;
    }

    pub fn set_stroke_width(&mut self, width: StrokeWidth) {
        self.stroke_width = width;
    }

    pub fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.stroke_style = style;
    }

    pub fn set_fill_color(&mut self, color: Option<SerializableColor>) {
        self.fill_color = color;
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.font_family = family;
    }

    /// Non-positive sizes are ignored.
    pub fn set_font_size(&mut self, size: f64) {
        if size > 0.0 {
            self.font_size = size;
        }
    }

    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history_limit = limit;
    }

    /// Style for a new element of `kind`. Fill only applies to closed shapes.
    pub fn style_for(&self, kind: ShapeKind) -> ShapeStyle {
        let fill_color = match kind {
            ShapeKind::Rectangle | ShapeKind::Circle => self.fill_color,
            _ => None,
        };
        ShapeStyle {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            stroke_style: self.stroke_style,
            fill_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.tool(), ToolKind::Select);
        assert_eq!(config.cursor(), CursorStyle::Default);
        assert_eq!(config.stroke_color(), SerializableColor::ink());
        assert!((config.font_size() - 18.0).abs() < f64::EPSILON);
        assert_eq!(config.history_limit(), None);
    }

    #[test]
    fn test_fill_only_for_closed_shapes() {
        let mut config = EditorConfig::default();
        config.set_fill_color(SerializableColor::from_hex("#ffc9c9"));
        assert!(config.style_for(ShapeKind::Rectangle).fill_color.is_some());
        assert!(config.style_for(ShapeKind::Circle).fill_color.is_some());
        assert!(config.style_for(ShapeKind::Line).fill_color.is_none());
        assert!(config.style_for(ShapeKind::Freehand).fill_color.is_none());
    }

    #[test]
    fn test_set_tool_updates_cursor() {
        let mut config = EditorConfig::default();
        config.set_tool(ToolKind::Erase);
        assert_eq!(config.cursor(), CursorStyle::NotAllowed);
    }

    #[test]
    fn test_font_size_rejects_non_positive() {
        let mut config = EditorConfig::default();
        config.set_font_size(0.0);
        assert!((config.font_size() - 18.0).abs() < f64::EPSILON);
        config.set_font_size(32.0);
        assert!((config.font_size() - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EditorConfig = serde_json::from_str(
            r##"{"tool": "rectangle", "stroke_width": "bold", "fill_color": "#a5d8ff"}"##,
        )
        .unwrap();
        assert_eq!(config.tool(), ToolKind::Rectangle);
        assert_eq!(config.stroke_width(), StrokeWidth::Bold);
        assert_eq!(config.fill_color(), SerializableColor::from_hex("#a5d8ff"));
        assert_eq!(config.stroke_style(), StrokeStyle::Solid);
    }
}
