use slotmap::SlotMap;
use tracing::trace;

use crate::math::Point2;

use super::active_edges::ActiveEdgeList;
use super::edge_table::{Edge, EdgeId};
use super::output::{ContourId, OutputContours};
use super::select::{ClipOp, Operand, PerOperand};
use super::vertex_type::{Quadrants, VertexType};

/// Whether an implied horizontal edge of one operand is open while the
/// boundary is scanned left to right, and on which side of it the operand
/// lies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalState {
    #[default]
    Absent,
    /// The operand's interior is below the open horizontal.
    Bottom,
    /// The operand's interior is above the open horizontal.
    Top,
}

impl HorizontalState {
    /// Transition on meeting an edge of the operand at the boundary.
    ///
    /// `exists` is 1 when the edge continues above the boundary, 2 when it
    /// ended below it, and 3 for both. `parity` is the operand's parity just
    /// right of the edge.
    #[must_use]
    pub fn next(self, exists: u8, parity: bool) -> Self {
        match (self, exists, parity) {
            (HorizontalState::Absent, 1, false) | (HorizontalState::Absent, 2, true) => {
                HorizontalState::Bottom
            }
            (HorizontalState::Absent, 1, true) | (HorizontalState::Absent, 2, false) => {
                HorizontalState::Top
            }
            (HorizontalState::Bottom, 3, _) => HorizontalState::Top,
            (HorizontalState::Top, 3, _) => HorizontalState::Bottom,
            _ => HorizontalState::Absent,
        }
    }
}

/// Left-to-right state while scanning one boundary.
struct BoundaryScan {
    op: ClipOp,
    yb: f64,
    parity: PerOperand<bool>,
    horiz: PerOperand<HorizontalState>,
    /// x of the last point emitted on this boundary.
    px: f64,
    /// Contour left open by the previous edge, waiting for a partner.
    cf: Option<ContourId>,
}

/// Classifies every active edge at boundary `yb` and updates the output.
///
/// Also records, per edge, which operands lie just right of it; the
/// intersection pass starts from that.
pub fn process_boundary(
    op: ClipOp,
    ael: &ActiveEdgeList,
    edges: &mut SlotMap<EdgeId, Edge>,
    out: &mut OutputContours,
    yb: f64,
) {
    let mut scan = BoundaryScan {
        op,
        yb,
        parity: PerOperand::new(op == ClipOp::Subtract, false),
        horiz: PerOperand::default(),
        px: f64::MIN,
        cf: None,
    };
    for id in ael.iter() {
        scan.visit(&mut edges[id], out);
    }
}

impl BoundaryScan {
    fn visit(&mut self, edge: &mut Edge, out: &mut OutputContours) {
        let above = edge.bundle_above;
        let below = edge.bundle_below;
        let exists = above.zip_with(below, |a, b| u8::from(a) + 2 * u8::from(b));
        if exists.clip == 0 && exists.subject == 0 {
            return;
        }

        edge.side = self.parity;
        let p = self.parity;
        let h = self.horiz.map(|s| s != HorizontalState::Absent);
        let contributing = self.contributing(exists, h);

        let quadrants = Quadrants::from_memberships(self.op, p ^ h, p ^ h ^ below, p, p ^ above);

        self.parity = self.parity ^ above;
        for operand in Operand::ALL {
            if exists[operand] != 0 {
                self.horiz[operand] = self.horiz[operand].next(exists[operand], self.parity[operand]);
            }
        }

        if contributing {
            self.emit(VertexType::classify(quadrants), edge, out);
        }
    }

    /// Whether the edge can lie on the result boundary given what is known
    /// just left of it.
    fn contributing(&self, exists: PerOperand<u8>, h: PerOperand<bool>) -> bool {
        let ex_c = exists.clip != 0;
        let ex_s = exists.subject != 0;
        let p = self.parity;
        match self.op {
            ClipOp::Intersect | ClipOp::Subtract => {
                (ex_c && (p.subject || h.subject))
                    || (ex_s && (p.clip || h.clip))
                    || (ex_c && ex_s && p.clip == p.subject)
            }
            ClipOp::Xor => ex_c || ex_s,
            ClipOp::Union => {
                (ex_c && (!p.subject || h.subject))
                    || (ex_s && (!p.clip || h.clip))
                    || (ex_c && ex_s && p.clip == p.subject)
            }
        }
    }

    #[allow(clippy::float_cmp)]
    fn emit(&mut self, vt: VertexType, edge: &mut Edge, out: &mut OutputContours) {
        let xb = edge.xb;
        let pt = Point2::new(xb, self.yb);
        match vt {
            VertexType::ExternalMinimum | VertexType::InternalMinimum => {
                let c = out.add_local_min(pt);
                edge.out_above = Some(c);
                self.px = xb;
                self.cf = Some(c);
            }
            VertexType::ExternalRightIntermediate => {
                if let Some(cf) = handle(self.cf, vt) {
                    if xb != self.px {
                        out.add_right(cf, pt);
                        self.px = xb;
                    }
                }
                edge.out_above = self.cf.take();
            }
            VertexType::ExternalLeftIntermediate => {
                if let Some(below) = handle(edge.out_below, vt) {
                    out.add_left(below, pt);
                }
                self.px = xb;
                self.cf = edge.out_below;
            }
            VertexType::ExternalMaximum => {
                if let Some(cf) = handle(self.cf.take(), vt) {
                    if xb != self.px {
                        out.add_left(cf, pt);
                        self.px = xb;
                    }
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.merge_right(cf, below);
                    }
                }
            }
            VertexType::InternalLeftIntermediate => {
                if let Some(cf) = handle(self.cf, vt) {
                    if xb != self.px {
                        out.add_left(cf, pt);
                        self.px = xb;
                    }
                }
                edge.out_above = self.cf.take();
            }
            VertexType::InternalRightIntermediate => {
                if let Some(below) = handle(edge.out_below, vt) {
                    out.add_right(below, pt);
                }
                self.px = xb;
                self.cf = edge.out_below.take();
            }
            VertexType::InternalMaximum => {
                if let Some(cf) = handle(self.cf.take(), vt) {
                    if xb != self.px {
                        out.add_right(cf, pt);
                        self.px = xb;
                    }
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.merge_left(cf, below);
                    }
                }
                edge.out_below = None;
            }
            VertexType::InternalMaximumAndMinimum => {
                if let Some(cf) = handle(self.cf, vt) {
                    if xb != self.px {
                        out.add_right(cf, pt);
                        self.px = xb;
                    }
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.merge_left(cf, below);
                    }
                }
                edge.out_below = None;
                let c = out.add_local_min(pt);
                edge.out_above = Some(c);
                self.cf = Some(c);
            }
            VertexType::ExternalMaximumAndMinimum => {
                if let Some(cf) = handle(self.cf, vt) {
                    if xb != self.px {
                        out.add_left(cf, pt);
                        self.px = xb;
                    }
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.merge_right(cf, below);
                    }
                }
                edge.out_below = None;
                let c = out.add_local_min(pt);
                edge.out_above = Some(c);
                self.cf = Some(c);
            }
            VertexType::LeftEdge => {
                if edge.bot.y == self.yb {
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.add_left(below, pt);
                    }
                }
                edge.out_above = edge.out_below;
                self.px = xb;
            }
            VertexType::RightEdge => {
                if edge.bot.y == self.yb {
                    if let Some(below) = handle(edge.out_below, vt) {
                        out.add_right(below, pt);
                    }
                }
                edge.out_above = edge.out_below;
                self.px = xb;
            }
            VertexType::Empty | VertexType::Full | VertexType::TopEdge | VertexType::BottomEdge => {}
        }
    }
}

/// Passes `id` through, noting at trace level when a vertex expected a
/// contour that is not there.
pub(crate) fn handle(id: Option<ContourId>, vt: VertexType) -> Option<ContourId> {
    if id.is_none() {
        trace!(?vt, "vertex has no output contour to extend");
    }
    id
}
