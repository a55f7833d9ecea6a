//! Wedge detection over classified curve paths.
//!
//! Curves are reduced to 4-point control polygons and represented by one
//! reference point each. Candidate triples come from two [`TripleFinder`]
//! strategies: mutual nearest neighbours, repeated until no pass finds a
//! new wedge, then a single distance-threshold rescan over the leftovers
//! using the largest reference spacing seen among accepted wedges. Every
//! candidate is oriented, validated and, if accepted, merged into a closed
//! [`Wedge`].

mod config;
pub mod finder;
pub mod merge;
pub mod orient;
pub mod reference;
pub mod validate;

pub use config::WedgeConfig;
pub use finder::{MutualNearest, Triple, TripleFinder, WithinDistance};
pub use validate::{Rejection, WedgeValidator};

use std::collections::BTreeSet;
use std::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::path::{check_paths, without};
use crate::geometry::{Curve, PathMap, Wedge};
use crate::math::distance_2d::squared_distance;
use crate::operations::reduce::ReduceCurve;

/// Accepted wedges and the identifiers of the curves they consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct WedgeSet<K> {
    pub wedges: Vec<Wedge>,
    pub consumed: BTreeSet<K>,
}

impl<K: Ord + Clone> WedgeSet<K> {
    fn empty() -> Self {
        Self {
            wedges: Vec::new(),
            consumed: BTreeSet::new(),
        }
    }

    /// Copy of `paths` without the consumed identifiers.
    #[must_use]
    pub fn unmatched(&self, paths: &PathMap<K>) -> PathMap<K> {
        without(paths, &self.consumed)
    }

    fn absorb(&mut self, other: Self) {
        self.wedges.extend(other.wedges);
        self.consumed.extend(other.consumed);
    }
}

/// Outcome of one matching pass.
struct Pass<K> {
    found: WedgeSet<K>,
    /// Largest squared spacing between consecutive reference points of an
    /// accepted triple; zero when nothing was accepted.
    max_dist: f64,
}

/// Finds wedges among curve paths.
///
/// Paths are expected to be curves already (see
/// [`ClassifyPaths`](crate::operations::ClassifyPaths)); paths that reduce
/// to fewer than three points cannot form a wedge side and are left
/// unconsumed.
#[derive(Debug, Clone, Default)]
pub struct FindWedges {
    config: WedgeConfig,
}

impl FindWedges {
    /// Creates a new wedge search with the given configuration.
    #[must_use]
    pub fn new(config: WedgeConfig) -> Self {
        Self { config }
    }

    /// Executes the search. The input map is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for an invalid configuration and
    /// a `GeometryError` if a path is empty or has a non-finite coordinate.
    pub fn execute<K: Ord + Clone + Debug>(&self, curves: &PathMap<K>) -> Result<WedgeSet<K>> {
        self.config.validate()?;
        check_paths(curves)?;

        let pool = self.reduce_all(curves);

        let (mut result, max_dist) = self.mutual_passes(&pool);
        debug!(
            wedges = result.wedges.len(),
            max_dist, "mutual nearest-neighbour matching settled"
        );

        let leftovers: Vec<(K, Curve)> = pool
            .into_iter()
            .filter(|(id, _)| !result.consumed.contains(id))
            .collect();
        let rescan = self.run_pass(&leftovers, &WithinDistance { max_dist });
        debug!(
            wedges = rescan.found.wedges.len(),
            remaining = leftovers.len() - rescan.found.consumed.len(),
            "distance rescan finished"
        );

        result.absorb(rescan.found);
        Ok(result)
    }

    /// Reduces every path to a curve, in key order.
    fn reduce_all<K: Ord + Clone + Debug>(&self, curves: &PathMap<K>) -> Vec<(K, Curve)> {
        let reducer = ReduceCurve::new(self.config.max_cluster_iterations);
        curves
            .iter()
            .filter_map(|(id, path)| {
                let reduced = reducer.execute(path);
                let curve = Curve::from_points(&reduced);
                if curve.is_none() {
                    debug!(id = ?id, points = reduced.len(), "path too short to be a wedge side");
                }
                curve.map(|c| (id.clone(), c))
            })
            .collect()
    }

    /// Repeats mutual nearest-neighbour passes on the shrinking pool until a
    /// pass accepts nothing or the pass cap is reached.
    fn mutual_passes<K: Ord + Clone + Debug>(&self, pool: &[(K, Curve)]) -> (WedgeSet<K>, f64) {
        let mut result = WedgeSet::empty();
        let mut max_dist = 0.0_f64;
        let mut remaining: Vec<(K, Curve)> = pool.to_vec();

        for round in 0..self.config.max_matching_passes {
            let pass = self.run_pass(&remaining, &MutualNearest);
            debug!(
                round,
                pool = remaining.len(),
                accepted = pass.found.wedges.len(),
                "mutual nearest-neighbour pass"
            );
            if pass.found.wedges.is_empty() {
                return (result, max_dist);
            }
            max_dist = max_dist.max(pass.max_dist);
            remaining.retain(|(id, _)| !pass.found.consumed.contains(id));
            result.absorb(pass.found);
        }

        warn!(
            max_matching_passes = self.config.max_matching_passes,
            "mutual matching hit its pass cap; continuing with current state"
        );
        (result, max_dist)
    }

    /// Runs one finder over `pool`, accepting valid triples in candidate
    /// order. A candidate sharing a curve with an earlier accepted triple
    /// is skipped.
    fn run_pass<K: Ord + Clone + Debug>(
        &self,
        pool: &[(K, Curve)],
        finder: &dyn TripleFinder,
    ) -> Pass<K> {
        let curves: Vec<Curve> = pool.iter().map(|(_, c)| *c).collect();
        let refs = reference::reference_points(&curves, self.config.parallel_tolerance);
        let validator = WedgeValidator::new(
            self.config.apex_cluster_radius_sq,
            self.config.apex_cluster_size,
        );

        let mut found = WedgeSet::empty();
        let mut used: BTreeSet<usize> = BTreeSet::new();
        let mut max_dist = 0.0_f64;

        for triple in finder.candidates(&refs) {
            if triple.iter().any(|m| used.contains(m)) {
                continue;
            }
            let oriented = orient::orient(&triple.map(|m| curves[m]));
            if let Err(reason) = validator.check(&oriented) {
                let ids = triple.map(|m| &pool[m].0);
                trace!(?ids, ?reason, "triple rejected");
                continue;
            }

            let tri_refs = triple.map(|m| refs[m]);
            for i in 0..3 {
                max_dist = max_dist.max(squared_distance(&tri_refs[i], &tri_refs[(i + 1) % 3]));
            }
            found.wedges.push(merge::merge_ends(oriented, tri_refs));
            for m in triple {
                used.insert(m);
                found.consumed.insert(pool[m].0.clone());
            }
        }

        Pass { found, max_dist }
    }
}
