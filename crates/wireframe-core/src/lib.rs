//! Wireframe Core Types and Definitions
//!
//! This crate provides the foundational types shared by the wireframe layout
//! engine and its tools. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Semantic**: Component kinds, shapes, screens and documents ([`semantic`] module)

pub mod color;
pub mod geometry;
pub mod semantic;
