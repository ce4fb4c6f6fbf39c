use slotmap::SlotMap;

use crate::geometry::Contour;
use crate::math::Point2;

use super::output::ContourId;
use super::select::{ClipOp, Operand, PerOperand};

slotmap::new_key_type! {
    /// Identifier for an edge in the edge table.
    pub struct EdgeId;
}

/// Position of an edge within a bundle of coincident edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BundleState {
    #[default]
    Unbundled,
    /// The last (rightmost) edge of a bundle; carries the bundle's flags.
    Head,
    /// Any other edge of a bundle; its flags are cleared.
    Tail,
}

/// A directed, strictly rising segment of an input contour.
///
/// Fields suffixed `above`/`below` describe the edge relative to the current
/// scanbeam boundary: "above" for the beam about to be swept, "below" for the
/// beam just finished.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// Lower endpoint (smaller y).
    pub bot: Point2,
    /// Upper endpoint (larger y).
    pub top: Point2,
    /// x at the bottom of the current scanbeam.
    pub xb: f64,
    /// x at the top of the current scanbeam.
    pub xt: f64,
    /// Change in x per unit increase in y.
    pub dx: f64,
    pub operand: Operand,
    pub bundle_above: PerOperand<bool>,
    pub bundle_below: PerOperand<bool>,
    /// Per operand, whether the region just left of the edge lies inside
    /// that operand.
    pub side: PerOperand<bool>,
    pub state_above: BundleState,
    pub state_below: BundleState,
    /// Output contour this edge extends above the boundary.
    pub out_above: Option<ContourId>,
    /// Output contour this edge extended below the boundary.
    pub out_below: Option<ContourId>,
    /// Next edge of the same bound, which replaces this one at `top.y`.
    pub succ: Option<EdgeId>,
}

impl Edge {
    fn new(bot: Point2, top: Point2, operand: Operand, op: ClipOp) -> Self {
        Self {
            bot,
            top,
            xb: bot.x,
            xt: bot.x,
            dx: (top.x - bot.x) / (top.y - bot.y),
            operand,
            bundle_above: PerOperand::default(),
            bundle_below: PerOperand::default(),
            side: PerOperand::new(op == ClipOp::Subtract, false),
            state_above: BundleState::Unbundled,
            state_below: BundleState::Unbundled,
            out_above: None,
            out_below: None,
            succ: None,
        }
    }

    /// x coordinate of the edge's supporting line at height `y`.
    #[must_use]
    pub fn x_at(&self, y: f64) -> f64 {
        self.bot.x + self.dx * (y - self.bot.y)
    }
}

/// All bounds starting at one local minimum height, sorted by bottom x then
/// slope.
#[derive(Debug, Clone)]
pub struct LocalMinimum {
    pub y: f64,
    pub bounds: Vec<EdgeId>,
}

/// Edges of both operands, grouped into bounds that start at local minima.
///
/// A bound is a chain of strictly rising edges from a local minimum to a
/// local maximum. Horizontal edges are never stored; they are implied
/// between adjacent active edges at a scanbeam boundary.
#[derive(Debug)]
pub struct EdgeTable {
    op: ClipOp,
    pub edges: SlotMap<EdgeId, Edge>,
    /// Sorted by ascending `y`.
    pub minima: Vec<LocalMinimum>,
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

impl EdgeTable {
    /// Creates an empty table for `op`.
    #[must_use]
    pub fn new(op: ClipOp) -> Self {
        Self {
            op,
            edges: SlotMap::with_key(),
            minima: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }

    /// Adds every bound of `contour`. Contours with fewer than three points
    /// contribute nothing.
    pub fn add_contour(&mut self, contour: &Contour, operand: Operand) {
        if contour.len() < 3 {
            return;
        }
        let vertices = optimal_vertices(&contour.points);
        let n = vertices.len();
        for min in 0..n {
            let prev = vertices[(min + n - 1) % n].y;
            let next = vertices[(min + 1) % n].y;
            let y = vertices[min].y;
            if prev >= y && next > y {
                self.add_bound(&vertices, min, Direction::Forward, operand);
            }
        }
        for min in 0..n {
            let prev = vertices[(min + n - 1) % n].y;
            let next = vertices[(min + 1) % n].y;
            let y = vertices[min].y;
            if prev > y && next >= y {
                self.add_bound(&vertices, min, Direction::Reverse, operand);
            }
        }
    }

    /// Walks from the local minimum at `min` upward until the next vertex no
    /// longer rises, chaining the edges through `succ`.
    fn add_bound(&mut self, vertices: &[Point2], min: usize, dir: Direction, operand: Operand) {
        let n = vertices.len();
        let step = |i: usize| match dir {
            Direction::Forward => (i + 1) % n,
            Direction::Reverse => (i + n - 1) % n,
        };

        let mut chain: Vec<EdgeId> = Vec::new();
        let mut v = min;
        loop {
            let next = step(v);
            let id = self
                .edges
                .insert(Edge::new(vertices[v], vertices[next], operand, self.op));
            if let Some(&last) = chain.last() {
                self.edges[last].succ = Some(id);
            }
            chain.push(id);
            v = next;
            if vertices[step(v)].y <= vertices[v].y {
                break;
            }
        }

        self.insert_bound(vertices[min].y, chain[0]);
    }

    fn insert_bound(&mut self, y: f64, first: EdgeId) {
        let idx = self.minima.partition_point(|lm| lm.y < y);
        #[allow(clippy::float_cmp)]
        let exists = self.minima.get(idx).is_some_and(|lm| lm.y == y);
        if !exists {
            self.minima.insert(
                idx,
                LocalMinimum {
                    y,
                    bounds: Vec::new(),
                },
            );
        }
        let edge = self.edges[first];
        let edges = &self.edges;
        let bounds = &mut self.minima[idx].bounds;
        let pos = bounds
            .iter()
            .position(|&b| precedes(&edge, &edges[b]))
            .unwrap_or(bounds.len());
        bounds.insert(pos, first);
    }

    /// Every y at which an edge starts or ends.
    #[must_use]
    pub fn vertex_heights(&self) -> Vec<f64> {
        self.edges
            .values()
            .flat_map(|e| [e.bot.y, e.top.y])
            .collect()
    }
}

/// Sort order for edges starting at the same height: by x, then by slope.
#[allow(clippy::float_cmp)]
pub(crate) fn precedes(a: &Edge, b: &Edge) -> bool {
    a.xb < b.xb || (a.xb == b.xb && a.dx < b.dx)
}

/// Drops vertices interior to a horizontal run; only their run endpoints
/// matter to the sweep.
#[allow(clippy::float_cmp)]
fn optimal_vertices(points: &[Point2]) -> Vec<Point2> {
    let n = points.len();
    (0..n)
        .filter(|&i| {
            let y = points[i].y;
            points[(i + n - 1) % n].y != y || points[(i + 1) % n].y != y
        })
        .map(|i| points[i])
        .collect()
}
