use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::clip_execute;
use super::options::ClipOptions;
use super::select::ClipOp;

/// Computes the boolean union of two polygons.
pub struct Union<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    options: ClipOptions,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation with default options.
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

    /// Executes the union, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        clip_execute(ClipOp::Union, self.subject, self.clip, &self.options)
    }
}
