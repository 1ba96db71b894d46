//! Tether Core Types and Definitions
//!
//! This crate provides the foundational types shared by every Tether crate.
//! It includes:
//!
//! - **Geometry**: Integer points, sizes, bounding boxes and axes ([`geometry`] module)
//! - **Anchors**: Alignment anchors and the arithmetic that resolves them ([`anchor`] module)
//! - **Identifiers**: String-interned element identifiers ([`identifier::ElementId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod anchor;
pub mod color;
pub mod geometry;
pub mod identifier;
