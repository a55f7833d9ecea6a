use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::Result;
use crate::geometry::path::without;
use crate::geometry::{PathMap, Wedge};
use crate::operations::classify::ClassifyPaths;
use crate::operations::wedge::{FindWedges, WedgeConfig};

/// Everything a caller needs to re-serialize a detection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection<K> {
    pub wedges: Vec<Wedge>,
    pub consumed: BTreeSet<K>,
    /// Paths classified as straight segments.
    pub lines: PathMap<K>,
    /// Every input path that no wedge consumed, lines included.
    pub unmatched: PathMap<K>,
}

/// Classifies paths and searches the curves for wedges in one call.
#[derive(Debug, Clone)]
pub struct DetectWedges {
    threshold: f64,
    config: WedgeConfig,
}

impl DetectWedges {
    /// Creates a new detection with the classification threshold and the
    /// matching configuration.
    #[must_use]
    pub fn new(threshold: f64, config: WedgeConfig) -> Self {
        Self { threshold, config }
    }

    /// Executes classification followed by wedge matching.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ClassifyPaths::execute`] or
    /// [`FindWedges::execute`].
    pub fn execute<K: Ord + Clone + Debug>(&self, paths: &PathMap<K>) -> Result<Detection<K>> {
        let classified = ClassifyPaths::new(self.threshold).execute(paths)?;
        let found = FindWedges::new(self.config.clone()).execute(&classified.curves)?;
        let unmatched = without(paths, &found.consumed);
        Ok(Detection {
            wedges: found.wedges,
            consumed: found.consumed,
            lines: classified.lines,
            unmatched,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    /// Three strokes meeting pairwise at the corners of an equilateral
    /// triangle, each bowed towards the common centre.
    fn wedge_strokes() -> PathMap<u32> {
        let h = 0.866_025_403_784_438_6;
        let corners = [
            Point2::new(0.0, 1.0),
            Point2::new(-h, -0.5),
            Point2::new(h, -0.5),
        ];
        let mut paths = PathMap::new();
        for i in 0..3 {
            let p = corners[i];
            let q = corners[(i + 1) % 3];
            let pull = |t: f64| Point2::from((p + (q - p) * t).coords * 0.6);
            paths.insert(u32::try_from(i).unwrap(), vec![p, pull(0.3), pull(0.7), q]);
        }
        paths
    }

    #[test]
    fn classify_then_match() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mut paths = wedge_strokes();
        paths.insert(10, vec![Point2::new(5.0, 5.0), Point2::new(8.0, 6.0)]);

        let detection = DetectWedges::new(0.1, WedgeConfig::default())
            .execute(&paths)
            .unwrap();

        assert_eq!(detection.wedges.len(), 1);
        assert_eq!(
            detection.consumed.iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(
            detection.lines.keys().copied().collect::<Vec<_>>(),
            vec![10]
        );
        assert_eq!(
            detection.unmatched.keys().copied().collect::<Vec<_>>(),
            vec![10]
        );

        let junctions = detection.wedges[0].junctions();
        assert_relative_eq!(
            junctions[0],
            Point2::new(-0.866_025_403_784_438_6, -0.5),
            epsilon = 1e-9
        );
        assert!(detection.wedges[0].is_closed());
    }

    #[test]
    fn high_threshold_leaves_everything_unmatched() {
        let paths = wedge_strokes();
        let detection = DetectWedges::new(10.0, WedgeConfig::default())
            .execute(&paths)
            .unwrap();
        assert!(detection.wedges.is_empty());
        assert_eq!(detection.lines.len(), 3);
        assert_eq!(detection.unmatched, paths);
    }
}
