use crate::geometry::Polygon;
use crate::math::Point2;

/// Tests whether a point lies inside a polygon under the even-odd rule.
///
/// A point is inside when it is enclosed by an odd number of contours, so
/// holes work without consulting their flags. Points exactly on an edge may
/// land on either side.
pub struct ContainsPoint<'a> {
    polygon: &'a Polygon,
    point: Point2,
}

impl<'a> ContainsPoint<'a> {
    /// Creates a new `ContainsPoint` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2) -> Self {
        Self { polygon, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.polygon.contains(&self.point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn inside_and_outside_a_hole() {
        let outer = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let inner = Polygon::from_xy(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        let frame = outer.subtract(&inner).unwrap();
        assert!(ContainsPoint::new(&frame, Point2::new(0.5, 2.0)).execute());
        assert!(!ContainsPoint::new(&frame, Point2::new(2.0, 2.0)).execute());
        assert!(!ContainsPoint::new(&frame, Point2::new(5.0, 2.0)).execute());
    }

    #[test]
    fn union_covers_both_operands() {
        let a = Polygon::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = Polygon::from_xy(&[(0.5, 0.5), (2.0, 0.5), (2.0, 2.0), (0.5, 2.0)]);
        let u = a.union(&b).unwrap();
        for p in [Point2::new(0.25, 0.25), Point2::new(1.5, 1.5), Point2::new(0.75, 0.75)] {
            assert!(ContainsPoint::new(&u, p).execute());
        }
        assert!(!ContainsPoint::new(&u, Point2::new(1.5, 0.25)).execute());
    }
}
