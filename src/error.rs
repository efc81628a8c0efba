//! Error types for the simulation core.
//!
//! Impact and timeout are regular controller states, not errors. Everything
//! here is surfaced synchronously to the caller of the failing operation.

/// Errors raised by configuration validation and vector math.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("direction of a zero-length vector is undefined")]
    DegenerateVector,
}

impl SimulationError {
    /// Build an `InvalidConfiguration` error for a non-positive or non-finite value.
    pub fn not_positive(field: &'static str, value: f64) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason: "must be positive and finite",
        }
    }
}

/// Check that `value` is strictly positive and finite.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, SimulationError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::not_positive(field, value))
    }
}
