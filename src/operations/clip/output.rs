use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::error::SweepError;
use crate::geometry::{Contour, Polygon};
use crate::math::polygon_2d::signed_area;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Handle to an output contour under construction.
    pub struct ContourId;
}

/// A contour growing at both ends while the sweep runs.
///
/// `proxy` links towards the node that owns the point list; the owner links
/// to itself. After a merge the absorbed node is deactivated and linked to
/// the survivor, so handles held by edges stay valid. Links are shortened
/// as they are followed.
#[derive(Debug)]
struct OpenContour {
    points: VecDeque<Point2>,
    proxy: ContourId,
    active: bool,
    hole: bool,
    closed: bool,
}

/// Arena of output contours, owned by one clip invocation.
#[derive(Debug, Default)]
pub struct OutputContours {
    nodes: SlotMap<ContourId, OpenContour>,
}

impl OutputContours {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contours started so far, including merged-away ones.
    #[must_use]
    pub fn started(&self) -> usize {
        self.nodes.len()
    }

    /// Starts a new contour with both ends at `point`.
    pub fn add_local_min(&mut self, point: Point2) -> ContourId {
        self.nodes.insert_with_key(|id| OpenContour {
            points: VecDeque::from([point]),
            proxy: id,
            active: true,
            hole: false,
            closed: false,
        })
    }

    /// Prepends `point` to the left end of the contour behind `id`.
    pub fn add_left(&mut self, id: ContourId, point: Point2) {
        let owner = self.owner(id);
        self.nodes[owner].points.push_front(point);
    }

    /// Appends `point` to the right end of the contour behind `id`.
    pub fn add_right(&mut self, id: ContourId, point: Point2) {
        let owner = self.owner(id);
        self.nodes[owner].points.push_back(point);
    }

    /// Joins `p` onto the left end of `q` and labels the result a hole.
    ///
    /// When both handles already share one contour the ring is closed.
    pub fn merge_left(&mut self, p: ContourId, q: ContourId) {
        let target = self.owner(q);
        self.nodes[target].hole = true;
        let source = self.owner(p);
        if source == target {
            self.nodes[target].closed = true;
            return;
        }
        let mut points = std::mem::take(&mut self.nodes[source].points);
        points.append(&mut self.nodes[target].points);
        self.nodes[target].points = points;
        self.redirect(source, target);
    }

    /// Joins `p` onto the right end of `q` and labels the result external.
    ///
    /// When both handles already share one contour the ring is closed.
    pub fn merge_right(&mut self, p: ContourId, q: ContourId) {
        let target = self.owner(q);
        self.nodes[target].hole = false;
        let source = self.owner(p);
        if source == target {
            self.nodes[target].closed = true;
            return;
        }
        let mut points = std::mem::take(&mut self.nodes[source].points);
        self.nodes[target].points.append(&mut points);
        self.redirect(source, target);
    }

    fn redirect(&mut self, from: ContourId, to: ContourId) {
        let node = &mut self.nodes[from];
        node.active = false;
        node.proxy = to;
    }

    /// Follows proxy links from `id` to the node owning its points.
    fn owner(&mut self, id: ContourId) -> ContourId {
        let mut root = id;
        while self.nodes[root].proxy != root {
            root = self.nodes[root].proxy;
        }
        let mut current = id;
        while current != root {
            let next = self.nodes[current].proxy;
            self.nodes[current].proxy = root;
            current = next;
        }
        root
    }

    /// Emits every closed ring as a result contour.
    ///
    /// Rings with two or fewer points are discarded. External rings are
    /// emitted counter-clockwise and holes clockwise.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::UnclosedContour` if a contour with more than two
    /// points was never closed.
    pub fn into_polygon(self) -> Result<Polygon, SweepError> {
        let mut result = Polygon::new();
        for node in self.nodes.into_iter().map(|(_, node)| node) {
            if !node.active || node.points.len() <= 2 {
                continue;
            }
            if !node.closed {
                return Err(SweepError::UnclosedContour {
                    points: node.points.len(),
                });
            }
            let mut points: Vec<Point2> = node.points.into();
            let area = signed_area(&points);
            if (node.hole && area > 0.0) || (!node.hole && area < 0.0) {
                points.reverse();
            }
            result.push(if node.hole {
                Contour::new_hole(points)
            } else {
                Contour::new(points)
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_built_from_one_minimum() {
        let mut out = OutputContours::new();
        let c = out.add_local_min(p(0.0, 0.0));
        out.add_right(c, p(1.0, 0.0));
        out.add_left(c, p(0.0, 1.0));
        out.add_left(c, p(1.0, 1.0));
        out.merge_right(c, c);

        let poly = out.into_polygon().unwrap();
        assert_eq!(poly.len(), 1);
        let ring = &poly.contours[0];
        assert!(!ring.hole);
        assert_eq!(
            ring.points,
            vec![p(1.0, 1.0), p(0.0, 1.0), p(0.0, 0.0), p(1.0, 0.0)]
        );
        assert!(ring.signed_area() > 0.0);
    }

    #[test]
    fn merge_of_two_minima_redirects_handles() {
        let mut out = OutputContours::new();
        let a = out.add_local_min(p(0.0, 0.0));
        let b = out.add_local_min(p(4.0, 0.0));
        out.add_right(a, p(1.0, 1.0));
        out.add_left(b, p(3.0, 1.0));
        // Valley between the two minima: a's right end meets b's left end.
        out.merge_left(a, b);
        // Both handles now extend the same contour.
        out.add_left(b, p(0.0, 2.0));
        out.add_right(a, p(4.0, 2.0));
        out.merge_right(a, b);

        let poly = out.into_polygon().unwrap();
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.contours[0].len(), 6);
        assert!(!poly.contours[0].hole);
        assert!((poly.contours[0].signed_area() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn chained_merges_reach_the_last_owner() {
        let mut out = OutputContours::new();
        let a = out.add_local_min(p(0.0, 0.0));
        let b = out.add_local_min(p(2.0, 0.0));
        let c = out.add_local_min(p(4.0, 0.0));
        out.add_right(a, p(1.0, 1.0));
        out.add_left(b, p(1.0, 1.0));
        out.merge_left(a, b);
        out.add_right(b, p(3.0, 1.0));
        out.add_left(c, p(3.0, 1.0));
        out.merge_left(b, c);
        // `a` was absorbed into `b`, which was absorbed into `c`.
        out.add_left(a, p(0.0, 2.0));
        out.add_right(a, p(4.0, 2.0));
        out.merge_right(a, c);

        assert_eq!(out.owner(a), out.owner(c));
        let poly = out.into_polygon().unwrap();
        assert_eq!(poly.len(), 1);
        assert_eq!(poly.contours[0].len(), 9);
        assert!(!poly.contours[0].hole);
    }

    #[test]
    fn hole_is_emitted_clockwise() {
        let mut out = OutputContours::new();
        let c = out.add_local_min(p(1.0, 1.0));
        out.add_left(c, p(2.0, 1.0));
        out.add_right(c, p(1.0, 2.0));
        out.add_right(c, p(2.0, 2.0));
        out.merge_left(c, c);

        let poly = out.into_polygon().unwrap();
        assert_eq!(poly.len(), 1);
        assert!(poly.contours[0].hole);
        assert!(poly.contours[0].signed_area() < 0.0);
    }

    #[test]
    fn degenerate_rings_are_dropped() {
        let mut out = OutputContours::new();
        let c = out.add_local_min(p(0.0, 0.0));
        out.add_right(c, p(1.0, 0.0));
        assert_eq!(out.started(), 1);
        assert!(out.into_polygon().unwrap().is_empty());
    }

    #[test]
    fn unclosed_ring_is_an_error() {
        let mut out = OutputContours::new();
        let c = out.add_local_min(p(0.0, 0.0));
        out.add_right(c, p(1.0, 0.0));
        out.add_right(c, p(1.0, 1.0));
        assert!(matches!(
            out.into_polygon(),
            Err(SweepError::UnclosedContour { points: 3 })
        ));
    }
}
