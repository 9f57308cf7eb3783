//! Tree construction from records.
//!
//! This module turns a flat sequence of [`Record`]s into the sunburst
//! hierarchy and finalizes the weights used by the layout.
//!
//! # Pipeline Position
//!
//! ```text
//! Records
//!     ↓ build (this module)
//! Tree with leaf weights
//!     ↓ aggregate (this module)
//! Tree with subtree totals
//!     ↓ layout
//! Placed tree
//!     ↓ export
//! Document
//! ```
//!
//! [`Record`]: sunburst_core::record::Record

mod aggregate;
mod builder;
mod columns;

pub use aggregate::aggregate;
pub use builder::{DEFAULT_WEIGHT, TreeBuilder, parse_weight, path_segments};
pub use columns::ColumnResolver;
