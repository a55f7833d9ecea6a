use crate::geometry::Curve;
use crate::math::Point2;

/// One reference point per curve: the crossing of its end tangents, or the
/// control polygon's centroid when those tangents are parallel.
#[must_use]
pub fn reference_points(curves: &[Curve], parallel_tolerance: f64) -> Vec<Point2> {
    curves
        .iter()
        .map(|c| c.reference_point(parallel_tolerance))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PARALLEL_TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn one_point_per_curve_in_order() {
        let corner = Curve::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 2.0),
        ]);
        let flat = Curve::new([
            Point2::new(0.0, 5.0),
            Point2::new(1.0, 5.0),
            Point2::new(2.0, 5.0),
            Point2::new(3.0, 5.0),
        ]);
        let refs = reference_points(&[corner, flat], PARALLEL_TOLERANCE);
        assert_eq!(refs.len(), 2);
        assert_relative_eq!(refs[0], Point2::new(2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(refs[1], Point2::new(1.5, 5.0), epsilon = 1e-12);
    }
}
