//! Tunables for wedge matching.

use crate::error::{OperationError, Result};
use crate::math::PARALLEL_TOLERANCE;
use crate::operations::reduce::DEFAULT_MAX_ITERATIONS;

/// Configuration for [`FindWedges`](super::FindWedges).
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeConfig {
    /// Determinant magnitude below which two control lines count as
    /// parallel and the reference point falls back to the centroid.
    /// Default: 1e-6
    pub parallel_tolerance: f64,

    /// Squared distance within which two normalized curve endpoints are
    /// considered to meet.
    /// Default: 0.2
    pub apex_cluster_radius_sq: f64,

    /// Number of close endpoint pairs a wedge must show: one per corner.
    /// Default: 3
    pub apex_cluster_size: usize,

    /// Cap on clustering rounds when reducing an oversampled curve.
    /// Default: 1000
    pub max_cluster_iterations: usize,

    /// Cap on mutual-nearest-neighbour passes before the leftovers are
    /// handed to the distance rescan.
    /// Default: 1000
    pub max_matching_passes: usize,
}

impl Default for WedgeConfig {
    fn default() -> Self {
        Self {
            parallel_tolerance: PARALLEL_TOLERANCE,
            apex_cluster_radius_sq: 0.2,
            apex_cluster_size: 3,
            max_cluster_iterations: DEFAULT_MAX_ITERATIONS,
            max_matching_passes: 1000,
        }
    }
}

impl WedgeConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the parallel-line tolerance.
    #[must_use]
    pub fn with_parallel_tolerance(mut self, value: f64) -> Self {
        self.parallel_tolerance = value;
        self
    }

    /// Builder-style setter for the endpoint cluster radius (squared).
    #[must_use]
    pub fn with_apex_cluster_radius_sq(mut self, value: f64) -> Self {
        self.apex_cluster_radius_sq = value;
        self
    }

    /// Builder-style setter for the required number of close endpoint pairs.
    #[must_use]
    pub fn with_apex_cluster_size(mut self, value: usize) -> Self {
        self.apex_cluster_size = value;
        self
    }

    /// Builder-style setter for the curve reduction iteration cap.
    #[must_use]
    pub fn with_max_cluster_iterations(mut self, value: usize) -> Self {
        self.max_cluster_iterations = value;
        self
    }

    /// Builder-style setter for the matching pass cap.
    #[must_use]
    pub fn with_max_matching_passes(mut self, value: usize) -> Self {
        self.max_matching_passes = value;
        self
    }

    /// Checks that every field holds a usable value.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(OperationError::InvalidInput(msg).into()) };

        if !self.parallel_tolerance.is_finite() || self.parallel_tolerance < 0.0 {
            return invalid(format!(
                "parallel_tolerance must be finite and non-negative, got {}",
                self.parallel_tolerance
            ));
        }
        if !self.apex_cluster_radius_sq.is_finite() || self.apex_cluster_radius_sq <= 0.0 {
            return invalid(format!(
                "apex_cluster_radius_sq must be finite and positive, got {}",
                self.apex_cluster_radius_sq
            ));
        }
        // Six endpoints give at most fifteen pairs.
        if self.apex_cluster_size > 15 {
            return invalid(format!(
                "apex_cluster_size must be at most 15, got {}",
                self.apex_cluster_size
            ));
        }
        if self.max_cluster_iterations == 0 {
            return invalid("max_cluster_iterations must be positive".to_owned());
        }
        if self.max_matching_passes == 0 {
            return invalid("max_matching_passes must be positive".to_owned());
        }
        Ok(())
    }
}
