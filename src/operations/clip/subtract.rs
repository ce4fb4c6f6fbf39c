use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::clip_execute;
use super::options::ClipOptions;
use super::select::ClipOp;

/// Computes the boolean difference `subject − clip`.
pub struct Subtract<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    options: ClipOptions,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation with default options.
    #[must_use]
    pub fn new(subject: &'a Polygon, clip: &'a Polygon) -> Self {
        Self {
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

    /// Executes the difference, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        clip_execute(ClipOp::Subtract, self.subject, self.clip, &self.options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn operand_order_matters() {
        let big = Polygon::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let small = Polygon::from_xy(&[(3.0, 3.0), (5.0, 3.0), (5.0, 5.0), (3.0, 5.0)]);
        let ab = Subtract::new(&big, &small).execute().unwrap();
        let ba = Subtract::new(&small, &big).execute().unwrap();
        let area = |p: &Polygon| p.iter().map(|c| c.signed_area()).sum::<f64>();
        assert!((area(&ab) - 15.0).abs() < 1e-9);
        assert!((area(&ba) - 3.0).abs() < 1e-9);
    }
}
