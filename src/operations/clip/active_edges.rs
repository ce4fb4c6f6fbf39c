use slotmap::{SecondaryMap, SlotMap};
use tracing::trace;

use crate::error::SweepError;

use super::edge_table::{precedes, BundleState, Edge, EdgeId};

/// Edges crossing the current scanbeam, ordered left to right by their x at
/// the beam bottom.
///
/// `index` maps every active edge to its slot in `order` so crossings can
/// locate their edges without scanning.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeList {
    order: Vec<EdgeId>,
    index: SecondaryMap<EdgeId, usize>,
}

impl ActiveEdgeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Edge ids in left-to-right order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.order.iter().copied()
    }

    /// Index of `id` in the list.
    #[must_use]
    pub fn position(&self, id: EdgeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn reindex(&mut self, slots: impl IntoIterator<Item = usize>) {
        for i in slots {
            self.index.insert(self.order[i], i);
        }
    }

    /// Inserts `id` before the first edge it precedes by bottom x, then slope.
    pub fn insert(&mut self, edges: &SlotMap<EdgeId, Edge>, id: EdgeId) {
        let edge = &edges[id];
        let pos = self
            .order
            .iter()
            .position(|&o| precedes(edge, &edges[o]))
            .unwrap_or(self.order.len());
        self.order.insert(pos, id);
        self.reindex(pos..self.order.len());
    }

    /// Groups adjacent coincident edges at boundary `yb`.
    ///
    /// An edge that continues above `yb` bundles with its left neighbour when
    /// both share bottom x and slope within `epsilon`. The rightmost edge of a
    /// bundle becomes its head and carries the parity of every member; the
    /// others become tails with cleared flags.
    #[allow(clippy::float_cmp)]
    pub fn form_bundles(&self, edges: &mut SlotMap<EdgeId, Edge>, yb: f64, epsilon: f64) {
        let mut prev: Option<EdgeId> = None;
        for &id in &self.order {
            {
                let edge = &mut edges[id];
                let own = edge.operand;
                edge.bundle_above[own] = edge.top.y != yb;
                edge.bundle_above[own.other()] = false;
                edge.state_above = BundleState::Unbundled;
            }
            let Some(p) = prev else {
                prev = Some(id);
                continue;
            };
            let edge = edges[id];
            if !edge.bundle_above[edge.operand] {
                continue;
            }
            let left = edges[p];
            if (left.xb - edge.xb).abs() <= epsilon
                && (left.dx - edge.dx).abs() <= epsilon
                && left.top.y != yb
            {
                let own = edge.operand;
                let head = &mut edges[id];
                head.bundle_above[own] ^= left.bundle_above[own];
                head.bundle_above[own.other()] = left.bundle_above[own.other()];
                head.state_above = BundleState::Head;
                let tail = &mut edges[p];
                tail.bundle_above.clip = false;
                tail.bundle_above.subject = false;
                tail.state_above = BundleState::Tail;
            }
            prev = Some(id);
        }
    }

    /// Drops edges whose top lies on `yb` and computes the beam-top x of the
    /// rest.
    ///
    /// When a bundle head leaves, its left neighbour inherits the head's
    /// output contour so the remaining bundle keeps its link.
    #[allow(clippy::float_cmp)]
    pub fn remove_terminating(&mut self, edges: &mut SlotMap<EdgeId, Edge>, yb: f64, yt: Option<f64>) {
        let mut i = 0;
        while i < self.order.len() {
            let id = self.order[i];
            let edge = edges[id];
            if edge.top.y == yb {
                self.order.remove(i);
                self.index.remove(id);
                if edge.state_below == BundleState::Head && i > 0 {
                    let prev = self.order[i - 1];
                    if edges[prev].state_below == BundleState::Tail {
                        let still_bundled =
                            i > 1 && edges[self.order[i - 2]].state_below == BundleState::Tail;
                        let inheritor = &mut edges[prev];
                        inheritor.out_below = edge.out_below;
                        inheritor.state_below = if still_bundled {
                            BundleState::Head
                        } else {
                            BundleState::Unbundled
                        };
                    }
                }
            } else {
                if let Some(yt) = yt {
                    edges[id].xt = if edge.top.y == yt {
                        edge.top.x
                    } else {
                        edge.x_at(yt)
                    };
                }
                i += 1;
            }
        }
        self.reindex(0..self.order.len());
    }

    /// Moves the bundle headed by `e0` to just right of `e1`.
    ///
    /// Returns `Ok(false)` without changing anything when `e1` sits left of
    /// `e0`, which happens when rounding reports a crossing between edges
    /// already swapped.
    ///
    /// # Errors
    ///
    /// Returns `SweepError::MissingEdge` if either edge is not active.
    pub fn swap_bundles(
        &mut self,
        edges: &SlotMap<EdgeId, Edge>,
        e0: EdgeId,
        e1: EdgeId,
    ) -> Result<bool, SweepError> {
        let i0 = self.position(e0).ok_or(SweepError::MissingEdge)?;
        let i1 = self.position(e1).ok_or(SweepError::MissingEdge)?;
        if i1 < i0 {
            trace!(i0, i1, "crossing pair already reordered");
            return Ok(false);
        }
        let mut start = i0;
        if edges[e0].state_above == BundleState::Head {
            while start > 0 && edges[self.order[start - 1]].state_above == BundleState::Tail {
                start -= 1;
            }
        }
        self.order[start..=i1].rotate_left(i0 - start + 1);
        self.reindex(start..=i1);
        Ok(true)
    }

    /// Prepares every edge for the beam above `yt`.
    ///
    /// Edges ending at `yt` hand over to their bound successor; the rest
    /// move their bottom x up to the beam top. "Above" state becomes "below"
    /// state either way.
    #[allow(clippy::float_cmp)]
    pub fn advance(&mut self, edges: &mut SlotMap<EdgeId, Edge>, yt: f64) {
        for (i, slot) in self.order.iter_mut().enumerate() {
            let id = *slot;
            let edge = edges[id];
            let target = match edge.succ {
                Some(succ) if edge.top.y == yt => {
                    *slot = succ;
                    self.index.remove(id);
                    self.index.insert(succ, i);
                    succ
                }
                _ => {
                    edges[id].xb = edge.xt;
                    id
                }
            };
            let next = &mut edges[target];
            next.out_below = edge.out_above;
            next.state_below = edge.state_above;
            next.bundle_below = edge.bundle_above;
            edges[id].out_above = None;
        }
    }
}
