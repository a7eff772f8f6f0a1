//! Ray/primitive intersection for an offline ray tracer.
//!
//! [`geometry::Hitable`] is the contract every primitive implements, and
//! [`geometry::HitableList`] aggregates any number of them (including other lists)
//! into one hitable that reports the nearest hit.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod math;
pub mod parsing;
pub mod render;
