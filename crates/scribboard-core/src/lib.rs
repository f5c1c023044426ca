//! Scribboard Core Library
//!
//! Element model, geometry kernel, view transform, undo history and the
//! per-tool gesture machine of the Scribboard whiteboard. Rendering and UI
//! chrome live outside this crate.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod history;
pub mod input;
pub mod render;
pub mod shapes;
pub mod tools;

pub use camera::{Camera, screen_to_world};
pub use canvas::Canvas;
pub use config::{CursorStyle, EditorConfig};
pub use document::Document;
pub use error::CoreError;
pub use history::History;
pub use input::PointerEvent;
pub use render::{PaintItem, RenderContext, Renderer};
pub use shapes::{
    Element, ElementAtPosition, ElementId, Position, Shape, ShapeKind, ShapeStyle,
    classify_position, get_element_at_position, stroke_path_from_points,
};
pub use tools::{DragOffsets, Gesture, TextEntry, ToolKind};
