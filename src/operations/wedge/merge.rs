use crate::geometry::{Curve, Wedge};
use crate::math::centroid_2d::average;
use crate::math::distance_2d::squared_distance;
use crate::math::Point2;

/// Welds three oriented curves into a closed wedge.
///
/// Each junction is snapped to whichever of its two candidate points (end of
/// curve `i`, start of curve `i + 1`) lies closer to the centroid of the
/// reference points, and both curves take that exact point. Junctions are
/// processed in order 0, 1, 2; on a tie the end of curve `i` wins.
#[must_use]
pub fn merge_ends(curves: [Curve; 3], refs: [Point2; 3]) -> Wedge {
    let centre = average(&refs).unwrap_or(refs[0]);
    let mut curves = curves;
    for i in 0..3 {
        let j = (i + 1) % 3;
        let end = curves[i].end();
        let start = curves[j].start();
        let joint = if squared_distance(&centre, &end) <= squared_distance(&centre, &start) {
            end
        } else {
            start
        };
        curves[i].set_end(joint);
        curves[j].set_start(joint);
    }
    Wedge::new(curves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn junction_snaps_to_the_inner_point() {
        let centre_refs = [
            Point2::new(-0.1, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.0, 0.1),
        ];
        let a = Curve::new([
            Point2::new(0.0, 2.0),
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, 0.0),
            Point2::new(-2.0, -1.0),
        ]);
        let b = Curve::new([
            Point2::new(-1.8, -0.9),
            Point2::new(0.0, -0.5),
            Point2::new(1.0, -0.5),
            Point2::new(2.0, -1.0),
        ]);
        let c = Curve::new([
            Point2::new(2.0, -1.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 2.0),
        ]);
        let wedge = merge_ends([a, b, c], centre_refs);
        assert!(wedge.is_closed());
        assert_eq!(wedge.junctions()[0], Point2::new(-1.8, -0.9));
        assert_eq!(wedge.curves()[0].points[..3], a.points[..3]);
    }

    #[test]
    fn merged_output_is_always_closed() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = || Point2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0));
        for _ in 0..200 {
            let curves = [
                Curve::new([p(), p(), p(), p()]),
                Curve::new([p(), p(), p(), p()]),
                Curve::new([p(), p(), p(), p()]),
            ];
            let wedge = merge_ends(curves, [p(), p(), p()]);
            assert!(wedge.is_closed());
            for (merged, original) in wedge.curves().iter().zip(&curves) {
                assert_eq!(merged.points[1..3], original.points[1..3]);
            }
        }
    }
}
