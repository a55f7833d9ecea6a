use super::centroid_2d::average;
use super::distance_2d::{chain_length, squared_distance};
use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` unless the
/// cross product of the directions is below `tolerance` in magnitude.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    tolerance: f64,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() < tolerance {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Intersects the line through `p1, p2` with the line through `p3, p4`.
///
/// Falls back to the centroid of the four points when the lines are
/// parallel within `tolerance`, or when the crossing lies farther (squared)
/// from that centroid than the squared chain length `p1 → p2 → p3 → p4`.
#[must_use]
pub fn control_line_intersection(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    tolerance: f64,
) -> Point2 {
    let quad = [*p1, *p2, *p3, *p4];
    let centroid = average(&quad).unwrap_or(*p1);

    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let Some((t, _)) = line_line_intersect_2d(p1, &d1, p3, &d2, tolerance) else {
        return centroid;
    };

    let crossing = point_at(p1, &d1, t);
    if squared_distance(&crossing, &centroid) > chain_length(&quad) {
        return centroid;
    }
    crossing
}
