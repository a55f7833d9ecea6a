use nalgebra::{DMatrix, DVector};

use super::centroid_2d::average;
use super::Point2;

/// Singular values of the mean-centred `n × 2` point matrix, largest first.
///
/// Returns an empty vector for an empty point set.
#[must_use]
pub fn centred_singular_values(points: &[Point2]) -> DVector<f64> {
    let Some(mean) = average(points) else {
        return DVector::zeros(0);
    };
    let centred = DMatrix::from_fn(points.len(), 2, |i, j| points[i][j] - mean[j]);
    let mut values: Vec<f64> = centred.singular_values().iter().copied().collect();
    values.sort_by(|a, b| b.total_cmp(a));
    DVector::from_vec(values)
}

/// Second-largest singular value of the mean-centred points.
///
/// Measures how far a point sequence departs from a straight line: it is
/// zero for collinear input. Sequences of one or two points are always
/// collinear and score `0.0` without running the decomposition.
#[must_use]
pub fn second_singular_value(points: &[Point2]) -> f64 {
    if points.len() <= 2 {
        return 0.0;
    }
    centred_singular_values(points)
        .get(1)
        .copied()
        .unwrap_or(0.0)
}
