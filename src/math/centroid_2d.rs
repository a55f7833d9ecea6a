use super::{Point2, Vector2};

/// Coordinate-wise mean of a set of points.
///
/// Returns `None` for an empty set: there is no meaningful centroid, and
/// callers must not substitute the origin for it.
#[must_use]
pub fn average(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point2::from(sum / n))
}
