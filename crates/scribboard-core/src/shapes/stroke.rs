//! Freehand ink outlines.
//!
//! A stroke is sampled as a polyline. An [`StrokeOutliner`] turns it into a
//! closed polygon around the ink, and [`stroke_path_from_points`] smooths
//! that polygon into a fillable path.

use kurbo::{BezPath, Point, Vec2};

/// Turns sampled stroke points into the outline polygon of the ink.
pub trait StrokeOutliner {
    /// Outline of a stroke drawn through `points` with nominal width `size`.
    fn outline(&self, points: &[Point], size: f64) -> Vec<Point>;
}

/// Outliner that simulates pen pressure from sampling speed.
///
/// Fast movement (widely spaced samples) thins the line, slow movement keeps
/// it at full width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureOutliner {
    /// How much speed thins the stroke, in `0.0..=1.0`.
    pub thinning: f64,
    /// Segments used to round off a single-point dab.
    pub cap_segments: usize,
}

impl Default for PressureOutliner {
    fn default() -> Self {
        Self {
            thinning: 0.5,
            cap_segments: 8,
        }
    }
}

impl PressureOutliner {
    fn radius_at(&self, points: &[Point], i: usize, size: f64) -> f64 {
        let step = match (i.checked_sub(1).and_then(|p| points.get(p)), points.get(i)) {
            (Some(prev), Some(cur)) => (*cur - *prev).hypot(),
            _ => 0.0,
        };
        let speed = if size > 0.0 { (step / size).min(1.0) } else { 0.0 };
        (size / 2.0) * (1.0 - self.thinning.clamp(0.0, 1.0) * speed)
    }

    fn dab(&self, center: Point, radius: f64) -> Vec<Point> {
        let n = self.cap_segments.max(3);
        (0..n)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / n as f64;
                center + Vec2::from_angle(angle) * radius
            })
            .collect()
    }
}

impl StrokeOutliner for PressureOutliner {
    fn outline(&self, points: &[Point], size: f64) -> Vec<Point> {
        match points {
            [] => Vec::new(),
            [only] => self.dab(*only, size / 2.0),
            _ => {
                let last = points.len() - 1;
                let mut left = Vec::with_capacity(points.len());
                let mut right = Vec::with_capacity(points.len());
                for (i, point) in points.iter().enumerate() {
                    let prev = points[i.saturating_sub(1)];
                    let next = points[(i + 1).min(last)];
                    let tangent = next - prev;
                    let len = tangent.hypot();
                    let normal = if len < f64::EPSILON {
                        Vec2::new(0.0, 1.0)
                    } else {
                        Vec2::new(-tangent.y, tangent.x) / len
                    };
                    let radius = self.radius_at(points, i, size);
                    left.push(*point + normal * radius);
                    right.push(*point - normal * radius);
                }
                right.reverse();
                left.extend(right);
                left
            }
        }
    }
}

/// Smooth a closed polygon into a fillable path.
///
/// Each vertex becomes the control point of a quadratic segment ending at the
/// midpoint to the next vertex, wrapping around to the first. Empty input
/// yields an empty path.
pub fn stroke_path_from_points(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    for (i, &point) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        path.quad_to(point, point.midpoint(next));
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape as _};

    #[test]
    fn test_empty_points_give_empty_path() {
        assert!(stroke_path_from_points(&[]).elements().is_empty());
    }

    #[test]
    fn test_path_structure() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        let path = stroke_path_from_points(&points);
        let els = path.elements();
        // move + one quad per vertex + close
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(els[1], PathEl::QuadTo(Point::new(0.0, 0.0), Point::new(5.0, 0.0)));
        // Last segment wraps back toward the first vertex.
        assert_eq!(els[3], PathEl::QuadTo(Point::new(10.0, 10.0), Point::new(5.0, 5.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn test_single_point_dab() {
        let outliner = PressureOutliner::default();
        let outline = outliner.outline(&[Point::new(5.0, 5.0)], 8.0);
        assert_eq!(outline.len(), 8);
        for p in outline {
            assert!(((p - Point::new(5.0, 5.0)).hypot() - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_outline_surrounds_polyline() {
        let outliner = PressureOutliner::default();
        let points = [Point::new(0.0, 0.0), Point::new(50.0, 0.0), Point::new(100.0, 0.0)];
        let outline = outliner.outline(&points, 16.0);
        assert_eq!(outline.len(), 6);
        let bounds = stroke_path_from_points(&outline).bounding_box();
        assert!(bounds.y0 < 0.0 && bounds.y1 > 0.0);
    }

    #[test]
    fn test_fast_strokes_are_thinner() {
        let outliner = PressureOutliner::default();
        let slow = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let fast = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        let width = |o: &[Point]| (o[1].y - o[2].y).abs();
        assert!(width(&outliner.outline(&fast, 16.0)) < width(&outliner.outline(&slow, 16.0)));
    }
}
