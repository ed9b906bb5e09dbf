//! Settings for the finite-difference gradient checker.
//!
//! The engine itself has nothing to configure: construction, ordering and both
//! passes are deterministic. Log verbosity is left to whichever logger the
//! application installs (`RUST_LOG=gradgraph_core=debug` with `env_logger`).

use crate::error::GradGraphError;

/// Step size and acceptance threshold for [`check_grad`](crate::autograd::check_grad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    epsilon: f64,
    tolerance: f64,
}

impl GradCheckConfig {
    pub const DEFAULT_EPSILON: f64 = 1e-6;
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `ConfigurationError` if either value is not a positive, finite number.
    pub fn new(epsilon: f64, tolerance: f64) -> Result<Self, GradGraphError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(GradGraphError::ConfigurationError(format!(
                "Epsilon must be positive and finite, got {}",
                epsilon
            )));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(GradGraphError::ConfigurationError(format!(
                "Tolerance must be positive and finite, got {}",
                tolerance
            )));
        }
        Ok(GradCheckConfig { epsilon, tolerance })
    }

    /// Half-width of the central difference.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: Self::DEFAULT_EPSILON,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}
