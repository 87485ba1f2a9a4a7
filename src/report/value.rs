//! Numeric coercion for gauge values.

use crate::metrics::GaugeValue;

impl GaugeValue {
    /// Coerce the value to a double, or `None` when it is not numeric.
    ///
    /// A gauge holding a non-numeric value is dropped from the report
    /// entirely, not reported as zero or surfaced as an error.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Signed(v) => Some(*v as f64),
            Self::Unsigned(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) | Self::Bool(_) => None,
        }
    }
}
