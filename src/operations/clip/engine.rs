use tracing::{debug, info, instrument, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;

use super::active_edges::ActiveEdgeList;
use super::boundary::process_boundary;
use super::contributing::{prefilter, usable};
use super::edge_table::EdgeTable;
use super::intersection::{build_intersection_table, process_intersections};
use super::options::ClipOptions;
use super::output::OutputContours;
use super::scanbeam::{Scanbeam, ScanbeamTable};
use super::select::{ClipOp, Operand};

/// Executes a boolean operation on two polygons.
///
/// Runs the full pipeline: validation, trivial-result shortcuts, bounding
/// box prefilter, edge table construction, and the scanbeam sweep. Inputs
/// are read under the even-odd rule and never modified.
///
/// # Errors
///
/// Returns `ConfigError` for unusable options, `GeometryError` for
/// non-finite input coordinates, and `SweepError` if the sweep ends with an
/// inconsistent output.
#[instrument(skip_all, fields(op = ?op, subject = subject.len(), clip = clip.len()))]
pub fn clip_execute(
    op: ClipOp,
    subject: &Polygon,
    clip: &Polygon,
    options: &ClipOptions,
) -> Result<Polygon> {
    options.validate()?;
    check_finite(subject)?;
    check_finite(clip)?;

    let subject_contours = usable(&subject.contours);
    let clip_contours = usable(&clip.contours);
    debug!(
        subject_contours = subject_contours.len(),
        clip_contours = clip_contours.len(),
        "clip requested"
    );

    if trivially_empty(op, subject_contours.is_empty(), clip_contours.is_empty()) {
        debug!("result is trivially empty");
        return Ok(Polygon::new());
    }

    let participants = prefilter(op, subject_contours, clip_contours);
    let mut table = EdgeTable::new(op);
    for contour in participants.subject {
        table.add_contour(contour, Operand::Subject);
    }
    for contour in participants.clip {
        table.add_contour(contour, Operand::Clip);
    }
    if table.is_empty() {
        debug!("no edges survive, result is empty");
        return Ok(Polygon::new());
    }

    let result = sweep(op, table, options.epsilon)?;
    info!(contours = result.len(), "clip complete");
    Ok(result)
}

/// Results that are empty without looking at any geometry.
fn trivially_empty(op: ClipOp, subject_empty: bool, clip_empty: bool) -> bool {
    (subject_empty && clip_empty)
        || (subject_empty && matches!(op, ClipOp::Intersect | ClipOp::Subtract))
        || (clip_empty && op == ClipOp::Intersect)
}

fn check_finite(polygon: &Polygon) -> std::result::Result<(), GeometryError> {
    for (contour, c) in polygon.contours.iter().enumerate() {
        if let Some(index) = c.points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { contour, index });
        }
    }
    Ok(())
}

/// Sweeps every scanbeam bottom to top and collects the output contours.
#[allow(clippy::float_cmp)]
fn sweep(op: ClipOp, mut table: EdgeTable, epsilon: f64) -> Result<Polygon> {
    let mut beams = ScanbeamTable::new(table.vertex_heights());
    let mut minima = std::mem::take(&mut table.minima).into_iter().peekable();
    let edges = &mut table.edges;
    let mut ael = ActiveEdgeList::new();
    let mut out = OutputContours::new();
    debug!(edges = edges.len(), boundaries = beams.len(), "sweep start");

    while let Some(Scanbeam { yb, yt }) = beams.next_beam() {
        if let Some(lm) = minima.next_if(|lm| lm.y == yb) {
            for bound in lm.bounds {
                ael.insert(edges, bound);
            }
        }

        ael.form_bundles(edges, yb, epsilon);
        process_boundary(op, &ael, edges, &mut out, yb);
        ael.remove_terminating(edges, yb, yt);

        if let Some(yt) = yt {
            let events = build_intersection_table(&ael, edges, yb, yt, epsilon);
            trace!(yb, yt, active = ael.len(), crossings = events.len(), "scanbeam");
            process_intersections(op, &events, &mut ael, edges, &mut out)?;
            ael.advance(edges, yt);
        }
    }

    if !ael.is_empty() {
        debug!(remaining = ael.len(), "edges still active after the last boundary");
    }
    debug!(started = out.started(), "sweep finished");
    Ok(out.into_polygon()?)
}

/// A boolean operation on two polygons with any [`ClipOp`].
///
/// The per-operation types [`super::Union`], [`super::Intersect`],
/// [`super::Subtract`] and [`super::Xor`] are shorthands for this.
pub struct Clip<'a> {
    op: ClipOp,
    subject: &'a Polygon,
    clip: &'a Polygon,
    options: ClipOptions,
}

impl<'a> Clip<'a> {
    /// Creates a new clip of `subject` by `clip` with default options.
    #[must_use]
    pub fn new(op: ClipOp, subject: &'a Polygon, clip: &'a Polygon) -> Self {
        Self {
            op,
            subject,
            clip,
            options: ClipOptions::default(),
        }
    }

    /// Sets custom options.
    #[must_use]
    pub fn with_options(mut self, options: ClipOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the operation, returning a new polygon.
    ///
    /// # Errors
    ///
    /// See [`clip_execute`].
    pub fn execute(&self) -> Result<Polygon> {
        clip_execute(self.op, self.subject, self.clip, &self.options)
    }
}
