mod classify;
mod detect;
mod reduce;
pub mod wedge;

pub use classify::{ClassifyPaths, Classified};
pub use detect::{DetectWedges, Detection};
pub use reduce::ReduceCurve;
