use tracing::debug;

use crate::geometry::{BoundingBox, Contour};

use super::select::ClipOp;

/// Contours of both operands that take part in the sweep.
#[derive(Debug, Default)]
pub struct Participants<'a> {
    pub subject: Vec<&'a Contour>,
    pub clip: Vec<&'a Contour>,
}

/// Keeps contours with at least three points.
#[must_use]
pub fn usable(contours: &[Contour]) -> Vec<&Contour> {
    contours.iter().filter(|c| c.len() >= 3).collect()
}

/// Drops contours whose bounding box cannot meet the other operand.
///
/// For intersect and subtract, a clip contour overlapping no subject contour
/// cannot change the result. For intersect the same holds for subject
/// contours against the clip. Union and xor keep everything. Touching boxes
/// count as overlapping.
#[must_use]
pub fn prefilter<'a>(op: ClipOp, subject: Vec<&'a Contour>, clip: Vec<&'a Contour>) -> Participants<'a> {
    if !matches!(op, ClipOp::Intersect | ClipOp::Subtract) || subject.is_empty() || clip.is_empty() {
        return Participants { subject, clip };
    }

    let subject_boxes: Vec<Option<BoundingBox>> = subject.iter().map(|c| c.bounds()).collect();
    let clip_boxes: Vec<Option<BoundingBox>> = clip.iter().map(|c| c.bounds()).collect();
    let meets = |b: &Option<BoundingBox>, others: &[Option<BoundingBox>]| {
        b.is_some_and(|b| others.iter().flatten().any(|o| b.overlaps(o)))
    };

    let clip_before = clip.len();
    let kept_clip: Vec<&Contour> = clip
        .into_iter()
        .zip(&clip_boxes)
        .filter(|(_, b)| meets(b, &subject_boxes))
        .map(|(c, _)| c)
        .collect();

    let subject_before = subject.len();
    let kept_subject: Vec<&Contour> = if op == ClipOp::Intersect {
        subject
            .into_iter()
            .zip(&subject_boxes)
            .filter(|(_, b)| meets(b, &clip_boxes))
            .map(|(c, _)| c)
            .collect()
    } else {
        subject
    };

    debug!(
        subject_dropped = subject_before - kept_subject.len(),
        clip_dropped = clip_before - kept_clip.len(),
        "bounding box prefilter"
    );
    Participants {
        subject: kept_subject,
        clip: kept_clip,
    }
}
