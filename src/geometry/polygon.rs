use crate::error::Result;
use crate::math::polygon_2d::{point_in_ring, signed_area};
use crate::math::Point2;
use crate::operations::clip::{Intersect, Subtract, Union, Xor};

use super::bbox::BoundingBox;

/// A closed ring of points. The first point is not repeated at the end.
///
/// `hole` is set on clip results for rings that bound a hole. Input rings
/// are classified by the even-odd rule and the flag is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    pub points: Vec<Point2>,
    pub hole: bool,
}

impl Contour {
    /// Creates an external contour from its points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            hole: false,
        }
    }

    /// Creates a contour from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Creates a contour flagged as a hole.
    #[must_use]
    pub fn new_hole(points: Vec<Point2>) -> Self {
        Self { points, hole: true }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }

    /// Even-odd containment test against this ring alone.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point_in_ring(point, &self.points)
    }
}

/// An ordered set of closed contours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub contours: Vec<Contour>,
}

impl Polygon {
    /// Creates an empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a polygon from its contours.
    #[must_use]
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Creates a single-contour polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::from_contours(vec![Contour::from_xy(coords)])
    }

    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    /// Bounding box over all contours, or `None` if there are no points.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.contours
            .iter()
            .filter_map(Contour::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Returns `true` if `point` is inside the polygon under the even-odd rule
    /// applied across all contours.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        self.contours
            .iter()
            .filter(|c| c.contains(point))
            .count()
            % 2
            == 1
    }

    /// Computes `self ∪ other` with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has non-finite coordinates or the sweep
    /// detects an internal inconsistency.
    pub fn union(&self, other: &Polygon) -> Result<Polygon> {
        Union::new(self, other).execute()
    }

    /// Computes `self ∩ other` with default options.
    ///
    /// # Errors
    ///
    /// See [`Polygon::union`].
    pub fn intersect(&self, other: &Polygon) -> Result<Polygon> {
        Intersect::new(self, other).execute()
    }

    /// Computes `self − other` with default options.
    ///
    /// # Errors
    ///
    /// See [`Polygon::union`].
    pub fn subtract(&self, other: &Polygon) -> Result<Polygon> {
        Subtract::new(self, other).execute()
    }

    /// Computes the symmetric difference of `self` and `other` with default options.
    ///
    /// # Errors
    ///
    /// See [`Polygon::union`].
    pub fn xor(&self, other: &Polygon) -> Result<Polygon> {
        Xor::new(self, other).execute()
    }
}

impl FromIterator<Contour> for Polygon {
    fn from_iter<I: IntoIterator<Item = Contour>>(iter: I) -> Self {
        Self::from_contours(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Contour {
        Contour::from_xy(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }

    #[test]
    fn contour_area_and_bounds() {
        let c = square(0.0, 0.0, 2.0, 3.0);
        assert!((c.signed_area() - 6.0).abs() < 1e-12);
        let b = c.bounds().unwrap();
        assert_eq!(b.min, Point2::new(0.0, 0.0));
        assert_eq!(b.max, Point2::new(2.0, 3.0));
    }

    #[test]
    fn polygon_bounds_span_all_contours() {
        let poly = Polygon::from_contours(vec![square(0.0, 0.0, 1.0, 1.0), square(3.0, -2.0, 4.0, 0.5)]);
        let b = poly.bounds().unwrap();
        assert_eq!(b.min, Point2::new(0.0, -2.0));
        assert_eq!(b.max, Point2::new(4.0, 1.0));
        assert!(Polygon::new().bounds().is_none());
    }

    #[test]
    fn contains_respects_holes_by_even_odd() {
        let poly = Polygon::from_contours(vec![square(0.0, 0.0, 3.0, 3.0), square(1.0, 1.0, 2.0, 2.0)]);
        assert!(poly.contains(&Point2::new(0.5, 0.5)));
        assert!(!poly.contains(&Point2::new(1.5, 1.5)));
        assert!(!poly.contains(&Point2::new(4.0, 1.5)));
    }

    #[test]
    fn collect_from_contours() {
        let poly: Polygon = vec![square(0.0, 0.0, 1.0, 1.0)].into_iter().collect();
        assert_eq!(poly.len(), 1);
        assert!(!poly.is_empty());
        assert_eq!((&poly).into_iter().count(), 1);
    }

    #[test]
    fn convenience_union_of_overlapping_squares() {
        let a = Polygon::from_contours(vec![square(0.0, 0.0, 1.0, 1.0)]);
        let b = Polygon::from_contours(vec![square(0.5, 0.0, 1.5, 1.0)]);
        let u = a.union(&b).unwrap();
        assert_eq!(u.len(), 1);
        assert!((u.contours[0].signed_area() - 1.5).abs() < 1e-12);
    }
}
