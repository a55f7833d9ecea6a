pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{CuneusError, Result};
pub use geometry::{Curve, Path, PathMap, Wedge};
pub use operations::wedge::{FindWedges, WedgeConfig, WedgeSet};
pub use operations::{ClassifyPaths, Classified, DetectWedges, Detection, ReduceCurve};
