//! Ellipse shape (the "circle" tool).

use super::{Position, ShapeStyle, ShapeTrait, TOLERANCE, TextMeasure};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse inscribed in the box spanned by two corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Corner where the drag started.
    pub start: Point,
    /// Corner under the pointer.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style }
    }

    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Horizontal and vertical radii.
    pub fn radii(&self) -> Vec2 {
        Vec2::new(
            (self.end.x - self.start.x).abs() / 2.0,
            (self.end.y - self.start.y).abs() / 2.0,
        )
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::from_rect(Rect::from_points(self.start, self.end))
    }
}

impl ShapeTrait for Ellipse {
    fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn classify(&self, point: Point, _measure: &dyn TextMeasure) -> Position {
        let center = self.center();
        let radii = self.radii();
        let dx2 = (point.x - center.x).powi(2);
        let dy2 = (point.y - center.y).powi(2);

        let value = dx2 / radii.x.powi(2) + dy2 / radii.y.powi(2);
        let outer = dx2 / (radii.x + TOLERANCE).powi(2) + dy2 / (radii.y + TOLERANCE).powi(2);

        if outer > 1.0 {
            Position::Outside
        } else if value > 1.0 {
            Position::Boundary
        } else {
            Position::Inside
        }
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }
}
