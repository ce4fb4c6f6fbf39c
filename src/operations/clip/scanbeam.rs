/// A horizontal band of the plane between two consecutive vertex heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scanbeam {
    /// Bottom boundary.
    pub yb: f64,
    /// Top boundary; `None` for the topmost boundary, which closes the sweep.
    pub yt: Option<f64>,
}

/// Sorted, de-duplicated vertex heights, consumed bottom to top.
#[derive(Debug, Clone, Default)]
pub struct ScanbeamTable {
    heights: Vec<f64>,
    cursor: usize,
}

impl ScanbeamTable {
    /// Builds the table from any collection of heights.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn new(heights: impl IntoIterator<Item = f64>) -> Self {
        let mut heights: Vec<f64> = heights.into_iter().collect();
        heights.sort_by(f64::total_cmp);
        // -0.0 and 0.0 are adjacent after sorting and must collapse.
        heights.dedup_by(|a, b| a == b);
        Self { heights, cursor: 0 }
    }

    /// Advances to the next boundary, returning the beam above it.
    pub fn next_beam(&mut self) -> Option<Scanbeam> {
        let yb = *self.heights.get(self.cursor)?;
        self.cursor += 1;
        Some(Scanbeam {
            yb,
            yt: self.heights.get(self.cursor).copied(),
        })
    }
}

impl Iterator for ScanbeamTable {
    type Item = Scanbeam;

    fn next(&mut self) -> Option<Scanbeam> {
        self.next_beam()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heights.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanbeamTable {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn heights_are_sorted_and_unique() {
        let table = ScanbeamTable::new([3.0, 1.0, 2.0, 1.0, 3.0]);
        assert_eq!(table.len(), 3);
        let beams: Vec<Scanbeam> = table.collect();
        assert_eq!(
            beams,
            vec![
                Scanbeam { yb: 1.0, yt: Some(2.0) },
                Scanbeam { yb: 2.0, yt: Some(3.0) },
                Scanbeam { yb: 3.0, yt: None },
            ]
        );
    }

    #[test]
    fn empty_table_yields_nothing() {
        let mut table = ScanbeamTable::new(std::iter::empty());
        assert!(table.next_beam().is_none());
    }

    #[test]
    fn signed_zeros_collapse() {
        let beams: Vec<Scanbeam> = ScanbeamTable::new([0.0, -0.0, 1.0]).collect();
        assert_eq!(beams.len(), 2);
    }

    #[test]
    fn negative_heights_sort_first() {
        let mut table = ScanbeamTable::new([0.5, -2.0, 0.0]);
        let first = table.next_beam().unwrap();
        assert!((first.yb + 2.0).abs() < f64::EPSILON);
        assert_eq!(first.yt, Some(0.0));
    }
}
