use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::math::distance_2d::pairwise_distances;
use crate::math::Point2;

/// Three indices into a reference point list, ascending.
pub type Triple = [usize; 3];

/// Proposes sets of three curves that may form one wedge.
///
/// Implementations see only the reference points, one per curve, and
/// return ascending, duplicate-free triples in lexicographic order.
pub trait TripleFinder {
    /// Returns candidate triples over `refs`.
    fn candidates(&self, refs: &[Point2]) -> Vec<Triple>;
}

/// Mutual nearest-neighbour consensus.
///
/// Every point lists its three nearest reference points, itself included.
/// A triple is proposed only when all three of its members list exactly
/// that triple.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutualNearest;

impl TripleFinder for MutualNearest {
    fn candidates(&self, refs: &[Point2]) -> Vec<Triple> {
        if refs.len() < 3 {
            return Vec::new();
        }
        let dist = pairwise_distances(refs);
        let nearest: Vec<Triple> = (0..refs.len()).map(|i| nearest_three(&dist, i)).collect();

        nearest
            .iter()
            .filter(|t| t.iter().all(|&m| nearest[m] == **t))
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Distance-threshold rescan.
///
/// Every point gathers the other reference points strictly closer than
/// `max_dist` (squared), and each pair of those neighbours forms a triple
/// with it.
#[derive(Debug, Clone, Copy)]
pub struct WithinDistance {
    pub max_dist: f64,
}

impl TripleFinder for WithinDistance {
    fn candidates(&self, refs: &[Point2]) -> Vec<Triple> {
        let dist = pairwise_distances(refs);
        let mut found = BTreeSet::new();
        for i in 0..refs.len() {
            let near = ranked_neighbours(&dist, i)
                .into_iter()
                .take_while(|&j| dist[(i, j)] < self.max_dist)
                .collect::<Vec<_>>();
            for (a, &j) in near.iter().enumerate() {
                for &k in &near[a + 1..] {
                    let mut triple = [i, j, k];
                    triple.sort_unstable();
                    found.insert(triple);
                }
            }
        }
        found.into_iter().collect()
    }
}

/// Other points ordered by distance from `i`, ties by index.
fn ranked_neighbours(dist: &DMatrix<f64>, i: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dist.nrows()).filter(|&j| j != i).collect();
    order.sort_by(|&a, &b| dist[(i, a)].total_cmp(&dist[(i, b)]).then(a.cmp(&b)));
    order
}

/// The three points nearest to `i`, itself included, as an ascending triple.
fn nearest_three(dist: &DMatrix<f64>, i: usize) -> Triple {
    let mut order: Vec<usize> = (0..dist.nrows()).collect();
    order.sort_by(|&a, &b| dist[(i, a)].total_cmp(&dist[(i, b)]).then(a.cmp(&b)));
    let mut triple = [order[0], order[1], order[2]];
    triple.sort_unstable();
    triple
}
