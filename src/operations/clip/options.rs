use crate::error::ConfigError;
use crate::math::DEFAULT_EPSILON;

/// Parameters controlling a clip operation.
///
/// Passed explicitly to every clip so independent operations never share
/// numeric state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipOptions {
    /// Tolerance for treating two active edges as coincident (same x at the
    /// scanbeam bottom and same slope), which bundles them.
    pub epsilon: f64,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ClipOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEpsilon` if `epsilon` is negative, NaN or
    /// infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_machine_epsilon() {
        let opts = ClipOptions::default();
        assert!((opts.epsilon - f64::EPSILON).abs() < f64::MIN_POSITIVE);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn builder_sets_epsilon() {
        let opts = ClipOptions::new().with_epsilon(1e-9);
        assert!((opts.epsilon - 1e-9).abs() < f64::EPSILON);
        assert!(opts.validate().is_ok());
        assert!(ClipOptions::new().with_epsilon(0.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_epsilon() {
        for bad in [-1e-9, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ClipOptions::new().with_epsilon(bad).validate(),
                Err(ConfigError::InvalidEpsilon(_))
            ));
        }
    }
}
