use nalgebra::DMatrix;

use super::Point2;

/// Squared Euclidean distance between two points.
#[must_use]
pub fn squared_distance(p: &Point2, q: &Point2) -> f64 {
    (p - q).norm_squared()
}

/// Symmetric `n × n` matrix of squared distances between every pair of
/// points. The diagonal is zero.
#[must_use]
pub fn pairwise_distances(points: &[Point2]) -> DMatrix<f64> {
    let n = points.len();
    DMatrix::from_fn(n, n, |i, j| squared_distance(&points[i], &points[j]))
}

/// Length of an open polyline measured as the sum of squared distances
/// between consecutive points.
///
/// This is the cost used to order a reduced curve and to bound the
/// control-line intersection; it is not the Euclidean arc length.
#[must_use]
pub fn chain_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| squared_distance(&w[0], &w[1]))
        .sum()
}

/// Index of the point farthest from `origin`. Ties keep the lowest index.
#[must_use]
pub fn farthest_from(origin: &Point2, points: &[Point2]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = squared_distance(origin, p);
        if best.is_none_or(|(_, bd)| d > bd) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}
