//! Geometric utilities for brush footprints

pub mod rect;
pub mod barycentric;

pub use rect::UvRect;
pub use barycentric::{barycentric, is_inside, interpolate};
