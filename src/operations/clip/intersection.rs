use slotmap::SlotMap;
use tracing::trace;

use crate::error::SweepError;
use crate::math::Point2;

use super::active_edges::ActiveEdgeList;
use super::boundary::handle;
use super::edge_table::{BundleState, Edge, EdgeId};
use super::output::OutputContours;
use super::select::{ClipOp, Operand, PerOperand};
use super::vertex_type::{Quadrants, VertexType};

/// A crossing of two active bundles inside a scanbeam.
///
/// `edge0` is left of `edge1` at the beam bottom.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub edge0: EdgeId,
    pub edge1: EdgeId,
    pub point: Point2,
    /// Height above the beam bottom; the table is ordered by this.
    offset: f64,
}

/// Finds every crossing of bundle heads within the beam `yb..yt`, ordered
/// bottom to top.
///
/// Edges are pushed onto a stack sorted by beam-top x; each new edge crosses
/// every stacked edge whose top x exceeds its own. Ties in height keep
/// discovery order, then `order_adjacent` fixes up crossings that meet at
/// one point.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn build_intersection_table(
    ael: &ActiveEdgeList,
    edges: &SlotMap<EdgeId, Edge>,
    yb: f64,
    yt: f64,
    epsilon: f64,
) -> Vec<Intersection> {
    let dy = yt - yb;
    let mut table: Vec<Intersection> = Vec::new();
    let mut stack: Vec<EdgeId> = Vec::new();
    let mut crossing: Vec<EdgeId> = Vec::new();

    for id in ael.iter() {
        let e = &edges[id];
        if e.state_above != BundleState::Head && !e.bundle_above.any() {
            continue;
        }
        crossing.push(id);
        let mut k = stack.len();
        while k > 0 {
            let s = &edges[stack[k - 1]];
            let den = (s.xt - s.xb) - (e.xt - e.xb);
            if e.xt >= s.xt || e.dx == s.dx || den.abs() <= epsilon {
                break;
            }
            let r = (e.xb - s.xb) / den;
            let offset = r * dy;
            let event = Intersection {
                edge0: stack[k - 1],
                edge1: id,
                point: Point2::new(s.xb + r * (s.xt - s.xb), yb + offset),
                offset,
            };
            let pos = table
                .iter()
                .position(|other| other.offset > offset)
                .unwrap_or(table.len());
            table.insert(pos, event);
            k -= 1;
        }
        stack.insert(k, id);
    }
    order_adjacent(&mut table, crossing);
    table
}

/// Reorders `table` so every crossing swaps two bundles that are neighbours
/// at the moment it is applied.
///
/// `order` holds the crossing bundle heads left to right at the beam bottom.
/// Three or more edges through one point get heights that differ only by
/// rounding, which can list a pair with another bundle still between them.
/// Such a crossing trades places with the next one whose pair is adjacent;
/// if there is none the order is kept.
fn order_adjacent(table: &mut [Intersection], mut order: Vec<EdgeId>) {
    fn adjacent(event: &Intersection, order: &[EdgeId]) -> bool {
        order
            .iter()
            .position(|&id| id == event.edge0)
            .is_some_and(|k| order.get(k + 1) == Some(&event.edge1))
    }

    for i in 0..table.len() {
        if !adjacent(&table[i], &order) {
            if let Some(j) = (i + 1..table.len()).find(|&j| adjacent(&table[j], &order)) {
                trace!(from = j, to = i, "crossing moved forward");
                table.swap(i, j);
            }
        }
        let event = table[i];
        let i0 = order.iter().position(|&id| id == event.edge0);
        let i1 = order.iter().position(|&id| id == event.edge1);
        if let (Some(i0), Some(i1)) = (i0, i1) {
            if i0 < i1 {
                let moved = order.remove(i0);
                order.insert(i1, moved);
            }
        }
    }
}

/// Applies every crossing in order: emits output geometry, flips the
/// operand sides of the crossing edges, and swaps them in the active list.
///
/// # Errors
///
/// Returns `SweepError::MissingEdge` if a crossing names an edge that is no
/// longer active.
pub fn process_intersections(
    op: ClipOp,
    events: &[Intersection],
    ael: &mut ActiveEdgeList,
    edges: &mut SlotMap<EdgeId, Edge>,
    out: &mut OutputContours,
) -> Result<(), SweepError> {
    for event in events {
        if ael.swap_bundles(edges, event.edge0, event.edge1)? {
            process_intersection(op, event, edges, out);
        }
    }
    Ok(())
}

fn process_intersection(
    op: ClipOp,
    event: &Intersection,
    edges: &mut SlotMap<EdgeId, Edge>,
    out: &mut OutputContours,
) {
    let mut e0 = edges[event.edge0];
    let mut e1 = edges[event.edge1];
    let b0 = e0.bundle_above;
    let b1 = e1.bundle_above;

    if b0.any() && b1.any() {
        let p = e0.out_above;
        let q = e1.out_above;
        let pt = event.point;

        let mut inside = PerOperand::<bool>::default();
        for t in Operand::ALL {
            inside[t] = (b0[t] && !e0.side[t])
                || (b1[t] && e1.side[t])
                || (!b0[t] && !b1[t] && e0.side[t] && e1.side[t]);
        }
        let quadrants =
            Quadrants::from_memberships(op, inside, inside ^ b1, inside ^ b0, inside ^ b1 ^ b0);
        let vt = VertexType::classify(quadrants);

        match vt {
            VertexType::ExternalMinimum | VertexType::InternalMinimum => {
                let c = out.add_local_min(pt);
                e0.out_above = Some(c);
                e1.out_above = Some(c);
            }
            VertexType::ExternalRightIntermediate => {
                if let Some(p) = handle(p, vt) {
                    out.add_right(p, pt);
                    e1.out_above = Some(p);
                    e0.out_above = None;
                }
            }
            VertexType::ExternalLeftIntermediate => {
                if let Some(q) = handle(q, vt) {
                    out.add_left(q, pt);
                    e0.out_above = Some(q);
                    e1.out_above = None;
                }
            }
            VertexType::ExternalMaximum => {
                if let Some((p, q)) = handle(p, vt).zip(handle(q, vt)) {
                    out.add_left(p, pt);
                    out.merge_right(p, q);
                    e0.out_above = None;
                    e1.out_above = None;
                }
            }
            VertexType::InternalLeftIntermediate => {
                if let Some(p) = handle(p, vt) {
                    out.add_left(p, pt);
                    e1.out_above = Some(p);
                    e0.out_above = None;
                }
            }
            VertexType::InternalRightIntermediate => {
                if let Some(q) = handle(q, vt) {
                    out.add_right(q, pt);
                    e0.out_above = Some(q);
                    e1.out_above = None;
                }
            }
            VertexType::InternalMaximum => {
                if let Some((p, q)) = handle(p, vt).zip(handle(q, vt)) {
                    out.add_right(p, pt);
                    out.merge_left(p, q);
                    e0.out_above = None;
                    e1.out_above = None;
                }
            }
            VertexType::InternalMaximumAndMinimum => {
                if let Some((p, q)) = handle(p, vt).zip(handle(q, vt)) {
                    out.add_right(p, pt);
                    out.merge_left(p, q);
                    let c = out.add_local_min(pt);
                    e0.out_above = Some(c);
                    e1.out_above = Some(c);
                }
            }
            VertexType::ExternalMaximumAndMinimum => {
                if let Some((p, q)) = handle(p, vt).zip(handle(q, vt)) {
                    out.add_left(p, pt);
                    out.merge_right(p, q);
                    let c = out.add_local_min(pt);
                    e0.out_above = Some(c);
                    e1.out_above = Some(c);
                }
            }
            VertexType::Empty
            | VertexType::Full
            | VertexType::TopEdge
            | VertexType::BottomEdge
            | VertexType::LeftEdge
            | VertexType::RightEdge => {}
        }
    }

    // Crossing a bundle flips the parity of the operands it carries.
    for t in Operand::ALL {
        if b0[t] {
            e1.side[t] = !e1.side[t];
        }
        if b1[t] {
            e0.side[t] = !e0.side[t];
        }
    }

    edges[event.edge0] = e0;
    edges[event.edge1] = e1;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Contour;
    use crate::operations::clip::edge_table::EdgeTable;

    /// Active list for the beam `0..1` with beam-top x computed.
    fn beam(contours: &[(&Contour, Operand)]) -> (EdgeTable, ActiveEdgeList) {
        let mut table = EdgeTable::new(ClipOp::Union);
        for (c, operand) in contours {
            table.add_contour(c, *operand);
        }
        let mut ael = ActiveEdgeList::new();
        for &b in &table.minima[0].bounds {
            ael.insert(&table.edges, b);
        }
        ael.form_bundles(&mut table.edges, 0.0, f64::EPSILON);
        ael.remove_terminating(&mut table.edges, 0.0, Some(1.0));
        (table, ael)
    }

    #[test]
    fn crossing_triangles_intersect_once() {
        // Two right triangles whose hypotenuses cross at (1, 0.5).
        let a = Contour::from_xy(&[(0.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let b = Contour::from_xy(&[(2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let (table, ael) = beam(&[(&a, Operand::Subject), (&b, Operand::Clip)]);
        let events = build_intersection_table(&ael, &table.edges, 0.0, 1.0, f64::EPSILON);
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert!((event.point.x - 1.0).abs() < 1e-12);
        assert!((event.point.y - 0.5).abs() < 1e-12);
        let left = &table.edges[event.edge0];
        assert!(left.xb < table.edges[event.edge1].xb);
    }

    #[test]
    fn parallel_edges_do_not_cross() {
        let a = Contour::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let b = Contour::from_xy(&[(2.0, 0.0), (3.0, 0.0), (3.0, 1.0), (2.0, 1.0)]);
        let (table, ael) = beam(&[(&a, Operand::Subject), (&b, Operand::Clip)]);
        assert!(build_intersection_table(&ael, &table.edges, 0.0, 1.0, f64::EPSILON).is_empty());
    }

    #[test]
    fn crossings_are_ordered_by_height() {
        // A steep edge from the left crosses two shallow ones at different heights.
        let wide = Contour::from_xy(&[(0.0, 0.0), (10.0, 1.0), (0.0, 1.0)]);
        let narrow = Contour::from_xy(&[(4.0, 0.0), (6.0, 0.0), (5.0, 1.0)]);
        let (table, ael) = beam(&[(&wide, Operand::Subject), (&narrow, Operand::Clip)]);
        let events = build_intersection_table(&ael, &table.edges, 0.0, 1.0, f64::EPSILON);
        assert_eq!(events.len(), 2);
        assert!(events[0].point.y <= events[1].point.y);
    }

    #[test]
    fn crossings_through_one_point_are_applied_to_neighbours() {
        // Rounding listed the crossings of three neighbouring edges through
        // one point as outer pair first.
        let a = Contour::from_xy(&[(0.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let b = Contour::from_xy(&[(1.0, 0.0), (1.0, 1.0), (0.5, 1.0)]);
        let c = Contour::from_xy(&[(2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let (table, ael) = beam(&[
            (&a, Operand::Subject),
            (&b, Operand::Clip),
            (&c, Operand::Clip),
        ]);
        let order: Vec<EdgeId> = ael
            .iter()
            .filter(|&id| table.edges[id].bundle_above.any())
            .collect();
        let (ea, eb, ec) = (order[1], order[2], order[3]);
        let event = |edge0, edge1| Intersection {
            edge0,
            edge1,
            point: Point2::new(1.0, 0.5),
            offset: 0.5,
        };
        let mut events = vec![event(ea, ec), event(ea, eb), event(eb, ec)];
        order_adjacent(&mut events, order);
        let pairs: Vec<(EdgeId, EdgeId)> = events.iter().map(|e| (e.edge0, e.edge1)).collect();
        assert_eq!(pairs, vec![(ea, eb), (ea, ec), (eb, ec)]);
    }

    #[test]
    fn processing_swaps_and_flips_sides() {
        let a = Contour::from_xy(&[(0.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let b = Contour::from_xy(&[(2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]);
        let (mut table, mut ael) = beam(&[(&a, Operand::Subject), (&b, Operand::Clip)]);
        let events = build_intersection_table(&ael, &table.edges, 0.0, 1.0, f64::EPSILON);
        let event = events[0];
        let before = (table.edges[event.edge0].side, table.edges[event.edge1].side);
        let mut out = OutputContours::new();
        process_intersections(ClipOp::Union, &events, &mut ael, &mut table.edges, &mut out).unwrap();

        let order: Vec<EdgeId> = ael.iter().collect();
        let i0 = order.iter().position(|&id| id == event.edge0).unwrap();
        let i1 = order.iter().position(|&id| id == event.edge1).unwrap();
        assert!(i1 < i0);
        assert_eq!(table.edges[event.edge1].side.subject, !before.1.subject);
        assert_eq!(table.edges[event.edge0].side.clip, !before.0.clip);
    }
}
