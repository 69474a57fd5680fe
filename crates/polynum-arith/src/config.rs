//! Calculator configuration.

/// Default relative tolerance for accepting a float as an integer.
pub const DEFAULT_INTEGER_TOLERANCE: f64 = 1e-9;

/// Tunables for [`Calculator`](crate::Calculator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorConfig {
    /// Relative tolerance used when deciding whether a normalized value is
    /// an integer before factorization.
    pub integer_tolerance: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            integer_tolerance: DEFAULT_INTEGER_TOLERANCE,
        }
    }
}

impl CalculatorConfig {
    /// Sets the integer tolerance. Negative or NaN values become zero,
    /// which demands exact integers.
    #[must_use]
    pub fn with_integer_tolerance(mut self, tolerance: f64) -> Self {
        self.integer_tolerance = tolerance.max(0.0);
        self
    }
}
