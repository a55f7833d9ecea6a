use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An ordered, non-empty sequence of points traced from one pen stroke.
///
/// Two points describe a straight segment; longer sequences approximate a
/// cubic control polygon.
pub type Path = Vec<Point2>;

/// Paths keyed by a caller-defined identifier.
///
/// Key order is the index order used by every deterministic tie-break in
/// the matching passes.
pub type PathMap<K> = BTreeMap<K, Path>;

/// Checks that every path in `paths` has at least one point and only finite
/// coordinates.
///
/// # Errors
///
/// Returns `GeometryError::EmptyPath` or `GeometryError::NonFinite` for the
/// first offending path in key order.
pub fn check_paths<K: Debug>(paths: &BTreeMap<K, Path>) -> Result<()> {
    for (id, path) in paths {
        if path.is_empty() {
            return Err(GeometryError::EmptyPath {
                id: format!("{id:?}"),
            }
            .into());
        }
        if path.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(GeometryError::NonFinite {
                id: format!("{id:?}"),
            }
            .into());
        }
    }
    Ok(())
}

/// Returns a copy of `paths` without the identifiers in `exclude`.
#[must_use]
pub fn without<K: Ord + Clone>(
    paths: &BTreeMap<K, Path>,
    exclude: &BTreeSet<K>,
) -> PathMap<K> {
    paths
        .iter()
        .filter(|(id, _)| !exclude.contains(*id))
        .map(|(id, path)| (id.clone(), path.clone()))
        .collect()
}
