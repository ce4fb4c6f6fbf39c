use super::select::{ClipOp, PerOperand};

/// Occupancy of the four quadrants around a vertex by the result region.
///
/// "Top" is the side of the sweep line still to be processed (greater y),
/// "bottom" the side already swept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quadrants {
    pub top_right: bool,
    pub top_left: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Quadrants {
    /// Builds the occupancy pattern from per-operand memberships of each
    /// quadrant, combining them with the operation's boolean combinator.
    #[must_use]
    pub fn from_memberships(
        op: ClipOp,
        top_right: PerOperand<bool>,
        top_left: PerOperand<bool>,
        bottom_right: PerOperand<bool>,
        bottom_left: PerOperand<bool>,
    ) -> Self {
        let occupied = |m: PerOperand<bool>| op.combine(m.clip, m.subject);
        Self {
            top_right: occupied(top_right),
            top_left: occupied(top_left),
            bottom_right: occupied(bottom_right),
            bottom_left: occupied(bottom_left),
        }
    }
}

/// Classification of a vertex by what it does to the output contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexType {
    /// No quadrant occupied.
    Empty,
    ExternalMaximum,
    ExternalLeftIntermediate,
    /// Only the two top quadrants occupied; no contour vertex.
    TopEdge,
    ExternalRightIntermediate,
    /// A contour edge continues through the vertex on its right side.
    RightEdge,
    InternalMaximumAndMinimum,
    InternalMinimum,
    ExternalMinimum,
    ExternalMaximumAndMinimum,
    /// A contour edge continues through the vertex on its left side.
    LeftEdge,
    InternalLeftIntermediate,
    /// Only the two bottom quadrants occupied; no contour vertex.
    BottomEdge,
    InternalRightIntermediate,
    InternalMaximum,
    /// Every quadrant occupied.
    Full,
}

impl VertexType {
    /// Classifies an occupancy pattern. Total over all 16 patterns.
    #[must_use]
    pub fn classify(q: Quadrants) -> Self {
        match (q.bottom_left, q.bottom_right, q.top_left, q.top_right) {
            (false, false, false, false) => VertexType::Empty,
            (false, false, false, true) => VertexType::ExternalMaximum,
            (false, false, true, false) => VertexType::ExternalLeftIntermediate,
            (false, false, true, true) => VertexType::TopEdge,
            (false, true, false, false) => VertexType::ExternalRightIntermediate,
            (false, true, false, true) => VertexType::RightEdge,
            (false, true, true, false) => VertexType::InternalMaximumAndMinimum,
            (false, true, true, true) => VertexType::InternalMinimum,
            (true, false, false, false) => VertexType::ExternalMinimum,
            (true, false, false, true) => VertexType::ExternalMaximumAndMinimum,
            (true, false, true, false) => VertexType::LeftEdge,
            (true, false, true, true) => VertexType::InternalLeftIntermediate,
            (true, true, false, false) => VertexType::BottomEdge,
            (true, true, false, true) => VertexType::InternalRightIntermediate,
            (true, true, true, false) => VertexType::InternalMaximum,
            (true, true, true, true) => VertexType::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_bits(bits: u8) -> Quadrants {
        Quadrants {
            top_right: bits & 1 != 0,
            top_left: bits & 2 != 0,
            bottom_right: bits & 4 != 0,
            bottom_left: bits & 8 != 0,
        }
    }

    #[test]
    fn table_matches_bit_layout() {
        let expected = [
            VertexType::Empty,
            VertexType::ExternalMaximum,
            VertexType::ExternalLeftIntermediate,
            VertexType::TopEdge,
            VertexType::ExternalRightIntermediate,
            VertexType::RightEdge,
            VertexType::InternalMaximumAndMinimum,
            VertexType::InternalMinimum,
            VertexType::ExternalMinimum,
            VertexType::ExternalMaximumAndMinimum,
            VertexType::LeftEdge,
            VertexType::InternalLeftIntermediate,
            VertexType::BottomEdge,
            VertexType::InternalRightIntermediate,
            VertexType::InternalMaximum,
            VertexType::Full,
        ];
        for (bits, vt) in (0u8..).zip(expected) {
            assert_eq!(VertexType::classify(from_bits(bits)), vt, "pattern {bits:04b}");
        }
    }

    #[test]
    fn ten_patterns_emit_contour_geometry() {
        let contour_types = (0..16)
            .map(|b| VertexType::classify(from_bits(b)))
            .filter(|vt| {
                !matches!(
                    vt,
                    VertexType::Empty
                        | VertexType::Full
                        | VertexType::TopEdge
                        | VertexType::BottomEdge
                        | VertexType::LeftEdge
                        | VertexType::RightEdge
                )
            })
            .count();
        assert_eq!(contour_types, 10);
    }

    #[test]
    fn union_quadrants_from_memberships() {
        let none = PerOperand::new(false, false);
        let subject_only = PerOperand::new(false, true);
        let q = Quadrants::from_memberships(ClipOp::Union, none, none, none, subject_only);
        assert_eq!(VertexType::classify(q), VertexType::ExternalMinimum);
        let q = Quadrants::from_memberships(ClipOp::Intersect, none, none, none, subject_only);
        assert_eq!(VertexType::classify(q), VertexType::Empty);
    }
}
