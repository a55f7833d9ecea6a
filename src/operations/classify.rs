use std::fmt::Debug;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::path::check_paths;
use crate::geometry::PathMap;
use crate::math::spread_2d::second_singular_value;

/// Paths split by shape: curved strokes and straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<K> {
    pub curves: PathMap<K>,
    pub lines: PathMap<K>,
}

/// Separates paths into curves and lines by their second singular value.
///
/// A path whose mean-centred points have a second singular value below the
/// threshold is near-collinear and counts as a line; every other path is a
/// curve. One- and two-point paths always score zero.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyPaths {
    threshold: f64,
}

impl ClassifyPaths {
    /// Creates a new classification with the given spread threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Executes the classification. The input map is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the threshold is negative or
    /// not finite, and a `GeometryError` if a path is empty or has a
    /// non-finite coordinate.
    pub fn execute<K: Ord + Clone + Debug>(&self, paths: &PathMap<K>) -> Result<Classified<K>> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "classification threshold must be finite and non-negative, got {}",
                self.threshold
            ))
            .into());
        }
        check_paths(paths)?;

        let (curves, lines): (PathMap<K>, PathMap<K>) = paths
            .iter()
            .map(|(id, path)| (id.clone(), path.clone()))
            .partition(|(_, path)| second_singular_value(path) >= self.threshold);

        debug!(
            curves = curves.len(),
            lines = lines.len(),
            threshold = self.threshold,
            "classified paths"
        );
        Ok(Classified { curves, lines })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CuneusError;
    use crate::math::Point2;

    fn sample() -> PathMap<&'static str> {
        let mut paths = PathMap::new();
        paths.insert("segment", vec![Point2::new(0.0, 0.0), Point2::new(5.0, 1.0)]);
        paths.insert(
            "hook",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(3.0, 2.0),
                Point2::new(4.0, 0.0),
            ],
        );
        paths.insert(
            "ruler",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(2.0, 2.0),
                Point2::new(3.0, 3.0),
            ],
        );
        paths.insert("dot", vec![Point2::new(9.0, 9.0)]);
        paths
    }

    #[test]
    fn splits_curves_from_lines() {
        let result = ClassifyPaths::new(0.5).execute(&sample()).unwrap();
        assert_eq!(result.curves.keys().copied().collect::<Vec<_>>(), vec!["hook"]);
        assert_eq!(
            result.lines.keys().copied().collect::<Vec<_>>(),
            vec!["dot", "ruler", "segment"]
        );
    }

    #[test]
    fn two_point_segment_is_a_line_for_any_positive_threshold() {
        let mut paths = PathMap::new();
        paths.insert(1_u8, vec![Point2::new(-3.0, 4.0), Point2::new(10.0, -2.0)]);
        for threshold in [1e-12, 1e-6, 0.1, 100.0] {
            let result = ClassifyPaths::new(threshold).execute(&paths).unwrap();
            assert!(result.curves.is_empty());
            assert!(result.lines.contains_key(&1));
        }
    }

    #[test]
    fn classification_partitions_the_input() {
        let paths = sample();
        let result = ClassifyPaths::new(0.5).execute(&paths).unwrap();
        assert_eq!(result.curves.len() + result.lines.len(), paths.len());
        assert!(result.curves.keys().all(|k| !result.lines.contains_key(k)));
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let err = ClassifyPaths::new(-1.0).execute(&sample()).unwrap_err();
        assert!(matches!(err, CuneusError::Operation(OperationError::InvalidInput(_))));
    }

    #[test]
    fn nan_threshold_is_rejected() {
        assert!(ClassifyPaths::new(f64::NAN).execute(&sample()).is_err());
    }
}
