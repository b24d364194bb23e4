//! Slate Core Types and Definitions
//!
//! This crate provides the foundational value types for the Slate drawing
//! surface. It includes:
//!
//! - **Geometry**: Positions, sizes and alignment ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Resolved stroke and text styling plus text measurement
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
