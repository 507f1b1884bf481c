//! Kover Core Types and Definitions
//!
//! This crate provides the foundational types for Kover antenna scenes.
//! It includes:
//!
//! - **Identifiers**: Case-sensitive entity identifiers ([`identifier::Id`])
//! - **Geometry**: Integer points and bounding boxes ([`geometry`] module)
//! - **Scene**: Buildings, antennas and the validated scene model ([`scene`] module)

pub mod geometry;
pub mod identifier;
pub mod scene;
