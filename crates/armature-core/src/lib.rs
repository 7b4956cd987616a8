//! Armature Core Types and Definitions
//!
//! This crate provides the foundational types for the Armature diagram
//! renderer. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke definitions for lines and borders ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
