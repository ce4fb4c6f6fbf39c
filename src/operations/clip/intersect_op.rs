use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::clip_execute;
use super::options::ClipOptions;
use super::select::ClipOp;

/// Computes the boolean intersection of two polygons.
pub struct Intersect<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    options: ClipOptions,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation with default options.
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

    /// Executes the intersection, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        clip_execute(ClipOp::Intersect, self.subject, self.clip, &self.options)
    }
}
