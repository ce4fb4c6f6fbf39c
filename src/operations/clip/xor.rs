use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::clip_execute;
use super::options::ClipOptions;
use super::select::ClipOp;

/// Computes the symmetric difference of two polygons.
pub struct Xor<'a> {
    subject: &'a Polygon,
    clip: &'a Polygon,
    options: ClipOptions,
}

impl<'a> Xor<'a> {
    /// Creates a new `Xor` operation with default options.
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

    /// Executes the symmetric difference, returning a new polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the operation fails.
    pub fn execute(&self) -> Result<Polygon> {
        clip_execute(ClipOp::Xor, self.subject, self.clip, &self.options)
    }
}
