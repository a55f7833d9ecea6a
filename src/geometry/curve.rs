use crate::math::distance_2d::chain_length;
use crate::math::intersect_2d::control_line_intersection;
use crate::math::Point2;

/// A reduced curve: a cubic control polygon `[start, c1, c2, end]`.
///
/// The two outer points are the stroke's endpoints, the inner two steer
/// the tangents at those endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub points: [Point2; 4],
}

impl Curve {
    /// Creates a curve from its four control points.
    #[must_use]
    pub fn new(points: [Point2; 4]) -> Self {
        Self { points }
    }

    /// Builds a curve from a reduced point sequence.
    ///
    /// Four points are taken as-is. Three points are read as a quadratic
    /// control polygon and degree-elevated to the equivalent cubic. Any other
    /// length has no cubic reading and yields `None`.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        match *points {
            [a, b, c, d] => Some(Self::new([a, b, c, d])),
            [a, b, c] => {
                let c1 = a + (b - a) * (2.0 / 3.0);
                let c2 = c + (b - c) * (2.0 / 3.0);
                Some(Self::new([a, c1, c2, c]))
            }
            _ => None,
        }
    }

    /// First point of the curve.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.points[0]
    }

    /// Last point of the curve.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.points[3]
    }

    /// Same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let [a, b, c, d] = self.points;
        Self::new([d, c, b, a])
    }

    /// Squared-step length of the control polygon.
    #[must_use]
    pub fn chain_length(&self) -> f64 {
        chain_length(&self.points)
    }

    /// Crossing of the two end tangents, standing in for the stroke's apex.
    ///
    /// Degenerate tangents fall back to the control polygon's centroid.
    #[must_use]
    pub fn reference_point(&self, parallel_tolerance: f64) -> Point2 {
        let [a, b, c, d] = &self.points;
        control_line_intersection(a, b, c, d, parallel_tolerance)
    }

    pub(crate) fn set_start(&mut self, p: Point2) {
        self.points[0] = p;
    }

    pub(crate) fn set_end(&mut self, p: Point2) {
        self.points[3] = p;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::PARALLEL_TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn reversed_swaps_endpoints() {
        let c = Curve::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 1.0),
            Point2::new(3.0, 0.0),
        ]);
        let r = c.reversed();
        assert_eq!(r.start(), c.end());
        assert_eq!(r.end(), c.start());
        assert_eq!(r.reversed(), c);
    }

    #[test]
    fn quadratic_is_elevated_to_cubic() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 3.0);
        let c = Point2::new(6.0, 0.0);
        let curve = Curve::from_points(&[a, b, c]).unwrap();
        assert_eq!(curve.start(), a);
        assert_eq!(curve.end(), c);
        assert_relative_eq!(curve.points[1], Point2::new(2.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(curve.points[2], Point2::new(4.0, 2.0), epsilon = 1e-12);
        // Elevated tangents still meet at the quadratic's control point.
        assert_relative_eq!(
            curve.reference_point(PARALLEL_TOLERANCE),
            b,
            epsilon = 1e-9
        );
    }

    #[test]
    fn too_short_sequences_have_no_curve() {
        assert!(Curve::from_points(&[]).is_none());
        let two = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(Curve::from_points(&two).is_none());
    }

    #[test]
    fn reference_point_falls_back_on_straight_curve() {
        let c = Curve::new([
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ]);
        assert_relative_eq!(
            c.reference_point(PARALLEL_TOLERANCE),
            Point2::new(1.5, 0.0),
            epsilon = 1e-12
        );
    }
}
