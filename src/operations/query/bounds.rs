use crate::geometry::{BoundingBox, Polygon};

/// Computes the axis-aligned bounding box of a polygon.
pub struct Bounds<'a> {
    polygon: &'a Polygon,
}

impl<'a> Bounds<'a> {
    /// Creates a new `Bounds` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query, returning `None` for a polygon without points.
    #[must_use]
    pub fn execute(&self) -> Option<BoundingBox> {
        self.polygon.bounds()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Contour;
    use crate::math::Point2;

    #[test]
    fn spans_every_contour() {
        let poly = Polygon::from_contours(vec![
            Contour::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            Contour::from_xy(&[(5.0, -2.0), (6.0, 3.0), (4.0, 3.0)]),
        ]);
        let bbox = Bounds::new(&poly).execute().unwrap();
        assert_eq!(bbox.min, Point2::new(0.0, -2.0));
        assert_eq!(bbox.max, Point2::new(6.0, 3.0));
    }

    #[test]
    fn empty_polygon_has_no_bounds() {
        assert!(Bounds::new(&Polygon::new()).execute().is_none());
    }
}
