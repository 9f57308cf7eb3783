//! Radial layout of an aggregated tree.
//!
//! The layout assigns every node a [`Placement`]: the angular interval it
//! owns and the canvas position derived from it. Depth maps to distance from
//! the canvas center and subtree weight maps to angular width.
//!
//! [`Placement`]: sunburst_core::tree::Placement

mod radial;

pub use radial::{LayoutReport, RadialEngine};
