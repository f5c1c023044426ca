//! Tool system for the whiteboard.

use crate::camera::Camera;
use crate::config::CursorStyle;
use crate::error::CoreError;
use crate::shapes::{ElementId, Shape};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Pan,
    #[default]
    Select,
    /// Freehand ink.
    Draw,
    Rectangle,
    Circle,
    Line,
    Arrow,
    Erase,
    Text,
}

impl ToolKind {
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pan => "pan",
            ToolKind::Select => "select",
            ToolKind::Draw => "draw",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
            ToolKind::Arrow => "arrow",
            ToolKind::Erase => "erase",
            ToolKind::Text => "text",
        }
    }

    /// Get all tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Pan,
            ToolKind::Select,
            ToolKind::Draw,
            ToolKind::Rectangle,
            ToolKind::Circle,
            ToolKind::Line,
            ToolKind::Arrow,
            ToolKind::Erase,
            ToolKind::Text,
        ]
    }

    /// Resting cursor while this tool is active.
    pub fn cursor(self) -> CursorStyle {
        match self {
            ToolKind::Pan => CursorStyle::Grab,
            ToolKind::Select => CursorStyle::Default,
            ToolKind::Draw
            | ToolKind::Rectangle
            | ToolKind::Circle
            | ToolKind::Line
            | ToolKind::Arrow => CursorStyle::Crosshair,
            ToolKind::Erase => CursorStyle::NotAllowed,
            ToolKind::Text => CursorStyle::Text,
        }
    }
}

impl FromStr for ToolKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pan" => Ok(ToolKind::Pan),
            "select" => Ok(ToolKind::Select),
            "draw" | "pencil" | "freehand" => Ok(ToolKind::Draw),
            "rectangle" => Ok(ToolKind::Rectangle),
            "circle" => Ok(ToolKind::Circle),
            "line" => Ok(ToolKind::Line),
            "arrow" => Ok(ToolKind::Arrow),
            "erase" | "eraser" => Ok(ToolKind::Erase),
            "text" => Ok(ToolKind::Text),
            other => Err(CoreError::UnknownTool(other.to_string())),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pointer-to-element offsets recorded when a drag starts.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOffsets {
    /// Offset from the element origin, for anchored shapes.
    Anchor(Vec2),
    /// One offset per point, for freehand strokes.
    Points(Vec<Vec2>),
}

impl DragOffsets {
    /// Offsets from `pointer` to the element's anchor or points.
    pub fn capture(shape: &Shape, pointer: Point) -> Self {
        match shape.points() {
            Some(points) => DragOffsets::Points(points.iter().map(|p| pointer - *p).collect()),
            None => DragOffsets::Anchor(pointer - shape.origin()),
        }
    }

    /// Move `shape` so the recorded offsets hold at `pointer`.
    ///
    /// Width and height are preserved; only the anchor moves.
    pub fn apply(&self, shape: &mut Shape, pointer: Point) {
        match (self, shape) {
            (DragOffsets::Points(offsets), Shape::Freehand(stroke)) => {
                for (point, offset) in stroke.points.iter_mut().zip(offsets) {
                    *point = pointer - *offset;
                }
            }
            (DragOffsets::Anchor(offset), shape) => {
                let target = pointer - *offset;
                let delta = target - shape.origin();
                shape.translate(delta);
            }
            (DragOffsets::Points(_), _) => {}
        }
    }
}

/// Phase of the gesture in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    /// No pointer held.
    #[default]
    Idle,
    /// Pan tool held; `last` is the previous pointer position in screen space.
    Panning { last: Point },
    /// Select tool dragging an element.
    ///
    /// `opened` flips once the first move has pushed a history step; later
    /// moves amend it.
    Dragging {
        id: ElementId,
        offsets: DragOffsets,
        opened: bool,
    },
    /// Shape tool dragging out the far corner of a new element.
    Drawing { id: ElementId },
    /// Draw tool appending points to a new stroke.
    Stroking { id: ElementId },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Element the gesture is editing, if any.
    pub fn target(&self) -> Option<ElementId> {
        match self {
            Gesture::Dragging { id, .. } | Gesture::Drawing { id } | Gesture::Stroking { id } => {
                Some(*id)
            }
            Gesture::Idle | Gesture::Panning { .. } => None,
        }
    }
}

/// An open text-entry surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    /// World-space anchor of the text.
    pub anchor: Point,
    /// Existing element being edited, or `None` for new text.
    pub editing: Option<ElementId>,
    /// Current content of the surface.
    pub content: String,
}

impl TextEntry {
    /// Entry for new text at `anchor`.
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            editing: None,
            content: String::new(),
        }
    }

    /// Entry preloaded with an existing element's text.
    pub fn editing(id: ElementId, anchor: Point, content: String) -> Self {
        Self {
            anchor,
            editing: Some(id),
            content,
        }
    }

    /// Where the UI should place the surface, in screen pixels.
    pub fn screen_position(&self, camera: &Camera) -> Point {
        camera.world_to_screen(self.anchor)
    }
}
