use crate::geometry::Curve;
use crate::math::centroid_2d::average;
use crate::math::distance_2d::squared_distance;
use crate::math::{Point2, Vector2, TOLERANCE};

/// Why a triple was turned down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// No junction meets at an angle whose cosine lies strictly in `(0, 1)`.
    NoAngledJunction { cosines: [f64; 3] },
    /// The curve endpoints do not gather into the expected number of corners.
    ApexCluster { close_pairs: usize },
}

/// Accepts or rejects three oriented curves as one wedge.
#[derive(Debug, Clone, Copy)]
pub struct WedgeValidator {
    cluster_radius_sq: f64,
    cluster_size: usize,
}

impl WedgeValidator {
    /// Creates a validator with the given endpoint cluster radius (squared)
    /// and the number of close endpoint pairs a wedge must show.
    #[must_use]
    pub fn new(cluster_radius_sq: f64, cluster_size: usize) -> Self {
        Self {
            cluster_radius_sq,
            cluster_size,
        }
    }

    /// Checks both wedge criteria on curves already in cycle order.
    ///
    /// # Errors
    ///
    /// Returns the first failed criterion as a [`Rejection`].
    pub fn check(&self, curves: &[Curve; 3]) -> Result<(), Rejection> {
        let cosines = junction_cosines(curves);
        if !cosines.iter().any(|&c| c > 0.0 && c < 1.0) {
            return Err(Rejection::NoAngledJunction { cosines });
        }

        let close_pairs = close_endpoint_pairs(curves, self.cluster_radius_sq);
        if close_pairs != self.cluster_size {
            return Err(Rejection::ApexCluster { close_pairs });
        }
        Ok(())
    }
}

fn unit_or_zero(v: Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// Cosine between the outgoing slope of curve `i` and the incoming slope of
/// curve `(i + 1) % 3`, for each junction.
///
/// The outgoing slope is `p3 - p2`, the incoming slope `p0 - p1`; a
/// zero-length slope yields a cosine of zero.
#[must_use]
pub fn junction_cosines(curves: &[Curve; 3]) -> [f64; 3] {
    let outgoing = curves.map(|c| unit_or_zero(c.points[3] - c.points[2]));
    let incoming = curves.map(|c| unit_or_zero(c.points[0] - c.points[1]));
    [0, 1, 2].map(|i| outgoing[i].dot(&incoming[(i + 1) % 3]))
}

/// Counts pairs of curve endpoints that point the same way from their
/// common centroid.
///
/// The six endpoints are centred on their own mean and scaled to unit
/// length; a pair is close when its squared distance is below `radius_sq`.
#[must_use]
pub fn close_endpoint_pairs(curves: &[Curve; 3], radius_sq: f64) -> usize {
    let ends: Vec<Point2> = curves
        .iter()
        .flat_map(|c| c.points.iter().step_by(3).copied())
        .collect();
    let Some(centre) = average(&ends) else {
        return 0;
    };
    let dirs: Vec<Point2> = ends
        .iter()
        .map(|p| Point2::from(unit_or_zero(p - centre)))
        .collect();

    let mut count = 0;
    for i in 0..dirs.len() {
        for j in (i + 1)..dirs.len() {
            if squared_distance(&dirs[i], &dirs[j]) < radius_sq {
                count += 1;
            }
        }
    }
    count
}
