pub mod curve;
pub mod path;
pub mod wedge;

pub use curve::Curve;
pub use path::{Path, PathMap};
pub use wedge::Wedge;
