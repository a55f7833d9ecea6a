use crate::geometry::Curve;
use crate::math::distance_2d::squared_distance;

/// Total gap around the cycle: squared distance from the end of each curve
/// to the start of the next.
#[must_use]
pub fn connection_cost(curves: &[Curve; 3]) -> f64 {
    (0..3)
        .map(|i| squared_distance(&curves[i].end(), &curves[(i + 1) % 3].start()))
        .sum()
}

/// Applies a reversal mask: bit `k` set reverses curve `k`.
#[must_use]
pub fn with_directions(curves: &[Curve; 3], mask: u8) -> [Curve; 3] {
    let mut out = *curves;
    for (k, curve) in out.iter_mut().enumerate() {
        if mask & (1 << k) != 0 {
            *curve = curve.reversed();
        }
    }
    out
}

/// Picks the direction of each curve that closes the cycle most tightly.
///
/// Tries all eight forward/reversed combinations and keeps the cheapest;
/// ties keep the earliest mask, so all-forward wins when nothing beats it.
#[must_use]
pub fn orient(curves: &[Curve; 3]) -> [Curve; 3] {
    let mut best = *curves;
    let mut best_cost = connection_cost(curves);
    for mask in 1..8_u8 {
        let candidate = with_directions(curves, mask);
        let cost = connection_cost(&candidate);
        if cost < best_cost {
            best = candidate;
            best_cost = cost;
        }
    }
    best
}
