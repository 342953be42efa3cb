//! Tag placement and bounds normalization.
//!
//! - [`spiral`] - The outward probe sequence for a single tag
//! - [`placement`] - Collision-free placement of a tag list
//! - [`bounds`] - Content bounding box, translation to origin and scale-to-fit

pub mod bounds;
pub mod placement;
pub mod spiral;

pub use bounds::{Fit, Normalized, fit_to_viewport, normalize};
pub use placement::{PlacementRecord, SpiralEngine, SpiralOutcome, collides};
pub use spiral::{GOLDEN_ANGLE_DEGREES, Probe, Spiral};
