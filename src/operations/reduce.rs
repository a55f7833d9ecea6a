use tracing::warn;

use crate::math::centroid_2d::average;
use crate::math::distance_2d::{chain_length, farthest_from, squared_distance};
use crate::math::Point2;

/// Default cap on clustering rounds.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Collapses an oversampled curve to a 4-point control polygon.
///
/// Runs a 4-centroid clustering in which the first and last centroids are
/// pinned to the start point and the point farthest from it, and only the
/// two middle centroids move. The converged centroids are then ordered so
/// that their squared-step chain length is minimal.
#[derive(Debug, Clone, Copy)]
pub struct ReduceCurve {
    max_iterations: usize,
}

impl Default for ReduceCurve {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITERATIONS)
    }
}

impl ReduceCurve {
    /// Creates a reducer that stops after `max_iterations` clustering rounds.
    #[must_use]
    pub fn new(max_iterations: usize) -> Self {
        Self { max_iterations }
    }

    /// Executes the reduction.
    ///
    /// Sequences of four or fewer points are returned unchanged; longer ones
    /// always come back as exactly four points. If the assignment has not
    /// settled within the iteration cap, the current centroids are used.
    #[must_use]
    pub fn execute(&self, points: &[Point2]) -> Vec<Point2> {
        if points.len() <= 4 {
            return points.to_vec();
        }

        let far = farthest_from(&points[0], points).unwrap_or(points.len() - 1);
        let mut centroids = [points[0], points[1], points[2], points[far]];
        let mut assignment: Option<Vec<usize>> = None;
        let mut converged = false;

        for _ in 0..self.max_iterations {
            let next: Vec<usize> = points.iter().map(|p| nearest(p, &centroids)).collect();
            if assignment.as_ref() == Some(&next) {
                converged = true;
                break;
            }
            for k in 1..3 {
                let members: Vec<Point2> = points
                    .iter()
                    .zip(&next)
                    .filter(|&(_, &a)| a == k)
                    .map(|(p, _)| *p)
                    .collect();
                if let Some(mean) = average(&members) {
                    centroids[k] = mean;
                }
            }
            assignment = Some(next);
        }

        if !converged {
            warn!(
                points = points.len(),
                max_iterations = self.max_iterations,
                "curve reduction hit its iteration cap; using current centroids"
            );
        }

        shortest_ordering(centroids).to_vec()
    }
}

/// Index of the centroid nearest to `p`. Ties keep the lowest index.
fn nearest(p: &Point2, centroids: &[Point2; 4]) -> usize {
    let mut best = 0;
    let mut best_d = squared_distance(p, &centroids[0]);
    for (k, c) in centroids.iter().enumerate().skip(1) {
        let d = squared_distance(p, c);
        if d < best_d {
            best = k;
            best_d = d;
        }
    }
    best
}

/// All 24 orderings of four items, in lexicographic order.
fn permutations4() -> Vec<[usize; 4]> {
    let mut out = Vec::with_capacity(24);
    for a in 0..4 {
        for b in (0..4).filter(|&b| b != a) {
            for c in (0..4).filter(|&c| c != a && c != b) {
                let d = 6 - a - b - c;
                out.push([a, b, c, d]);
            }
        }
    }
    out
}

/// Orders four points along the open path of minimal squared-step length.
/// Ties keep the earliest permutation, so an already optimal order is kept.
fn shortest_ordering(points: [Point2; 4]) -> [Point2; 4] {
    let mut best = points;
    let mut best_len = chain_length(&points);
    for perm in permutations4() {
        let candidate = perm.map(|i| points[i]);
        let len = chain_length(&candidate);
        if len < best_len {
            best = candidate;
            best_len = len;
        }
    }
    best
}
