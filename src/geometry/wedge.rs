use super::curve::Curve;
use crate::math::Point2;

/// A reconstructed wedge: three curves welded into one closed contour.
///
/// Curve `i` ends exactly where curve `(i + 1) % 3` starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    curves: [Curve; 3],
}

impl Wedge {
    pub(crate) fn new(curves: [Curve; 3]) -> Self {
        Self { curves }
    }

    /// The three welded curves in cycle order.
    #[must_use]
    pub fn curves(&self) -> &[Curve; 3] {
        &self.curves
    }

    /// The three junction points, junction `i` joining curve `i` to curve
    /// `(i + 1) % 3`.
    #[must_use]
    pub fn junctions(&self) -> [Point2; 3] {
        [
            self.curves[0].end(),
            self.curves[1].end(),
            self.curves[2].end(),
        ]
    }

    /// Closed outline of the wedge, each junction emitted once.
    ///
    /// The returned nine points run from the start of curve 0 around the
    /// cycle; the closing edge back to the first point is implicit.
    #[must_use]
    pub fn contour(&self) -> Vec<Point2> {
        let mut points = Vec::with_capacity(9);
        points.push(self.curves[0].start());
        for curve in &self.curves {
            points.extend_from_slice(&curve.points[1..]);
        }
        points.pop();
        points
    }

    /// Whether every junction is shared exactly by its two curves.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        (0..3).all(|i| self.curves[i].end() == self.curves[(i + 1) % 3].start())
    }
}
