//! Arrow shape.

use super::line::classify_infinite_line;
use super::{Position, ShapeStyle, ShapeTrait, TextMeasure};
use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A line with an open arrowhead at `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Start point.
    pub start: Point,
    /// End point (where the arrowhead points).
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Arrow {
    /// Length of each arrowhead stroke.
    pub const HEAD_SIZE: f64 = 15.0;

    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style }
    }

    /// Get the direction vector (normalized).
    pub fn direction(&self) -> Vec2 {
        let d = self.end - self.start;
        let len = d.hypot();
        if len < f64::EPSILON {
            Vec2::new(1.0, 0.0)
        } else {
            d / len
        }
    }

    /// Get the length of the arrow shaft.
    pub fn length(&self) -> f64 {
        (self.end - self.start).hypot()
    }

    /// The two barb tips of the arrowhead.
    pub fn head_points(&self) -> (Point, Point) {
        // Barbs are shortened on very short arrows so they never overshoot the tail.
        let size = Self::HEAD_SIZE.min(self.length());
        let dir = self.direction();
        let perp = Vec2::new(-dir.y, dir.x);
        let back = self.end - dir * size;
        (back + perp * size * 0.5, back - perp * size * 0.5)
    }
}

impl ShapeTrait for Arrow {
    fn corners(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    fn bounds(&self) -> Rect {
        let (left, right) = self.head_points();
        Rect::from_points(self.start, self.end)
            .union_pt(left)
            .union_pt(right)
    }

    fn classify(&self, point: Point, _measure: &dyn TextMeasure) -> Position {
        classify_infinite_line(self.start, self.end, point)
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if self.start == self.end {
            return path;
        }

        // Shaft
        path.move_to(self.start);
        path.line_to(self.end);

        // Arrowhead
        let (left, right) = self.head_points();
        path.move_to(self.end);
        path.line_to(left);
        path.move_to(self.end);
        path.line_to(right);

        path
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ApproxTextMeasure;

    fn arrow() -> Arrow {
        Arrow::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0), ShapeStyle::default())
    }

    #[test]
    fn test_direction() {
        let dir = arrow().direction();
        assert!((dir.x - 1.0).abs() < f64::EPSILON);
        assert!(dir.y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_head_points() {
        let (left, right) = arrow().head_points();
        assert!((left.x - 85.0).abs() < 1e-9);
        assert!((left.y - 7.5).abs() < 1e-9);
        assert!((right.x - 85.0).abs() < 1e-9);
        assert!((right.y + 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_hit_test_shaft() {
        let a = arrow();
        assert_eq!(a.classify(Point::new(50.0, 3.0), &ApproxTextMeasure), Position::Boundary);
        assert_eq!(a.classify(Point::new(50.0, 30.0), &ApproxTextMeasure), Position::Outside);
    }

    #[test]
    fn test_bounds_include_head() {
        let bounds = arrow().bounds();
        assert!((bounds.y0 + 7.5).abs() < 1e-9);
        assert!((bounds.y1 - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_path_has_shaft_and_barbs() {
        assert_eq!(arrow().to_path().elements().len(), 6);
    }
}
