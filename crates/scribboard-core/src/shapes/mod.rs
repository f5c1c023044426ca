//! Drawn elements and the geometry kernel that hit-tests them.

mod arrow;
mod ellipse;
mod freehand;
mod line;
mod rectangle;
pub mod stroke;
mod text;

pub use arrow::Arrow;
pub use ellipse::Ellipse;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use stroke::{PressureOutliner, StrokeOutliner, stroke_path_from_points};
pub use text::{ApproxTextMeasure, FontFamily, Text, TextMeasure};

use crate::error::CoreError;
use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hit-test tolerance in world units for shapes, lines and arrows.
pub const TOLERANCE: f64 = 10.0;
/// Hit-test tolerance for text boxes.
pub const TEXT_TOLERANCE: f64 = 5.0;
/// Maximum triangle-inequality slack for a freehand segment hit.
pub const FREEHAND_TOLERANCE: f64 = 5.0;

/// Serializable color representation (RGBA8).
///
/// Serialized as a `#rrggbb` / `#rrggbbaa` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The default ink color, `#1e1e1e`.
    pub fn ink() -> Self {
        Self::new(0x1e, 0x1e, 0x1e, 255)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(color: &str) -> Option<Self> {
        let hex = color.trim().strip_prefix('#')?;
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Some(Self::new(short(0)?, short(1)?, short(2)?, 255))
            }
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for SerializableColor {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or(CoreError::InvalidColor(value))
    }
}

impl From<SerializableColor> for String {
    fn from(color: SerializableColor) -> Self {
        color.to_hex()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Stroke width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeWidth {
    #[default]
    Thin,
    Bold,
    ExtraBold,
}

impl StrokeWidth {
    /// Width in pixels.
    pub fn px(self) -> f64 {
        match self {
            StrokeWidth::Thin => 1.0,
            StrokeWidth::Bold => 4.0,
            StrokeWidth::ExtraBold => 8.0,
        }
    }
}

/// Stroke dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeStyle {
    /// Dash and gap lengths handed to the renderer.
    pub fn dash_pattern(self) -> [f64; 2] {
        match self {
            StrokeStyle::Solid => [0.0, 0.0],
            StrokeStyle::Dashed => [10.0, 10.0],
            StrokeStyle::Dotted => [3.0, 3.0],
        }
    }
}

/// Style properties captured when an element is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke (or ink) color.
    pub stroke_color: SerializableColor,
    /// Stroke width class.
    pub stroke_width: StrokeWidth,
    /// Dash pattern.
    pub stroke_style: StrokeStyle,
    /// Fill color for closed shapes (None = no fill).
    pub fill_color: Option<SerializableColor>,
}

impl ShapeStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Stroke width in pixels.
    pub fn stroke_px(&self) -> f64 {
        self.stroke_width.px()
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::ink(),
            stroke_width: StrokeWidth::default(),
            stroke_style: StrokeStyle::default(),
            fill_color: None,
        }
    }
}

/// Stable element identifier.
///
/// Ids are handed out in increasing order and never reused, so they stay
/// valid across erasure. Paint order lives in [`crate::document::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a query point lies relative to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Inside,
    Boundary,
    Outside,
}

impl Position {
    /// Anything but `Outside`.
    pub fn is_hit(self) -> bool {
        self != Position::Outside
    }
}

/// Tag naming a shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
    Arrow,
    Freehand,
    Text,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Freehand => "freehand",
            ShapeKind::Text => "text",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "line" => Ok(ShapeKind::Line),
            "arrow" => Ok(ShapeKind::Arrow),
            "freehand" | "pencil" => Ok(ShapeKind::Freehand),
            "text" => Ok(ShapeKind::Text),
            other => Err(CoreError::UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// The `(x1, y1)` and `(x2, y2)` anchor corners, as stored.
    fn corners(&self) -> (Point, Point);

    /// Bounding box in world coordinates.
    fn bounds(&self) -> Rect;

    /// Classify a world-space point against this shape.
    fn classify(&self, point: Point, measure: &dyn TextMeasure) -> Position;

    /// Path handed to the renderer.
    fn to_path(&self) -> BezPath;

    /// Translate rigidly by `delta`.
    fn translate(&mut self, delta: Vec2);

    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;
}

/// A drawn shape: one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Ellipse),
    Line(Line),
    Arrow(Arrow),
    Freehand(Freehand),
    Text(Text),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Arrow(_) => ShapeKind::Arrow,
            Shape::Freehand(_) => ShapeKind::Freehand,
            Shape::Text(_) => ShapeKind::Text,
        }
    }

    fn as_trait(&self) -> &dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Line(s) => s,
            Shape::Arrow(s) => s,
            Shape::Freehand(s) => s,
            Shape::Text(s) => s,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn ShapeTrait {
        match self {
            Shape::Rectangle(s) => s,
            Shape::Circle(s) => s,
            Shape::Line(s) => s,
            Shape::Arrow(s) => s,
            Shape::Freehand(s) => s,
            Shape::Text(s) => s,
        }
    }

    pub fn corners(&self) -> (Point, Point) {
        self.as_trait().corners()
    }

    /// The `(x1, y1)` corner that drags are measured against.
    pub fn origin(&self) -> Point {
        self.corners().0
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn classify(&self, point: Point, measure: &dyn TextMeasure) -> Position {
        self.as_trait().classify(point, measure)
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.as_trait_mut().translate(delta);
    }

    pub fn style(&self) -> &ShapeStyle {
        self.as_trait().style()
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        self.as_trait_mut().style_mut()
    }

    /// Move the far corner of a two-point shape. No-op for other kinds.
    pub fn set_far_corner(&mut self, point: Point) {
        match self {
            Shape::Rectangle(s) => s.end = point,
            Shape::Circle(s) => s.end = point,
            Shape::Line(s) => s.end = point,
            Shape::Arrow(s) => s.end = point,
            Shape::Freehand(_) | Shape::Text(_) => {}
        }
    }

    /// Freehand points, if this is a stroke.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Shape::Freehand(f) => Some(f.points.as_slice()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// One entry of the board: a shape, its id, and the renderer's path cache.
///
/// The only way to mutate the shape is [`Element::edit`], which rebuilds the
/// cached path afterwards, so the payload never goes stale.
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    id: ElementId,
    shape: Shape,
    #[serde(skip)]
    payload: BezPath,
}

impl Element {
    pub fn new(id: ElementId, shape: Shape) -> Self {
        let payload = shape.to_path();
        Self { id, shape, payload }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Cached render path. Opaque to the core.
    pub fn payload(&self) -> &BezPath {
        &self.payload
    }

    /// Mutate the shape and refresh the payload.
    pub fn edit(&mut self, f: impl FnOnce(&mut Shape)) {
        f(&mut self.shape);
        self.payload = self.shape.to_path();
    }

    /// Copy with a mutated shape, leaving `self` untouched.
    pub fn edited(&self, f: impl FnOnce(&mut Shape)) -> Self {
        let mut next = self.clone();
        next.edit(f);
        next
    }

    pub fn classify(&self, point: Point, measure: &dyn TextMeasure) -> Position {
        self.shape.classify(point, measure)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.shape == other.shape
    }
}

/// Classify a world-space point against one element.
pub fn classify_position(point: Point, element: &Element, measure: &dyn TextMeasure) -> Position {
    element.classify(point, measure)
}

/// Result of [`get_element_at_position`].
#[derive(Debug, Clone, Copy)]
pub struct ElementAtPosition<'a> {
    pub position: Position,
    pub element: Option<&'a Element>,
}

impl ElementAtPosition<'_> {
    pub fn id(&self) -> Option<ElementId> {
        self.element.map(Element::id)
    }
}

/// First element, in the given order, that the point is not outside of.
///
/// Earlier elements win over later ones at overlapping points.
pub fn get_element_at_position<'a, I>(
    point: Point,
    elements: I,
    measure: &dyn TextMeasure,
) -> ElementAtPosition<'a>
where
    I: IntoIterator<Item = &'a Element>,
{
    for element in elements {
        let position = element.classify(point, measure);
        if position.is_hit() {
            return ElementAtPosition {
                position,
                element: Some(element),
            };
        }
    }
    ElementAtPosition {
        position: Position::Outside,
        element: None,
    }
}

/// Swap coordinates so the first corner is top-left.
pub(crate) fn normalize_corners(a: Point, b: Point) -> (Point, Point) {
    (
        Point::new(a.x.min(b.x), a.y.min(b.y)),
        Point::new(a.x.max(b.x), a.y.max(b.y)),
    )
}
