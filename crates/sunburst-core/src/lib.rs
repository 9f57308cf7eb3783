//! Sunburst Core Types and Definitions
//!
//! This crate provides the foundational types shared by the sunburst layout
//! pipeline. It includes:
//!
//! - **Identifiers**: Deterministic node identifiers ([`identifier::NodeId`])
//! - **Geometry**: Points, sizes, bounds and angular intervals ([`geometry`] module)
//! - **Records**: Input rows keyed by column name ([`record::Record`])
//! - **Tree**: The hierarchy of path segments ([`tree::Node`])

pub mod geometry;
pub mod identifier;
pub mod record;
pub mod tree;
