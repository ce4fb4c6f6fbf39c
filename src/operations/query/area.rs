use crate::geometry::Polygon;

/// Computes the net area of a polygon.
///
/// Hole contours subtract their area and all other contours add it,
/// regardless of winding. Suited to clip results, which carry hole flags.
pub struct Area<'a> {
    polygon: &'a Polygon,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the query, returning the net area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.polygon
            .iter()
            .map(|c| {
                let area = c.signed_area().abs();
                if c.hole {
                    -area
                } else {
                    area
                }
            })
            .sum()
    }
}
