//! tagcloud Core Types and Definitions
//!
//! This crate provides the foundational types shared by the tagcloud layout
//! engine and its front ends. It includes:
//!
//! - **Colors**: HSL and CSS color handling ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Text**: The sizing oracle contract and a cosmic-text measurer ([`text`] module)

pub mod color;
pub mod geometry;
pub mod text;
