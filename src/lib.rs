//! Treebrush - brush-driven tree instance scaling for terrain foliage editing

pub mod core;
pub mod math;
pub mod mask;
pub mod foliage;
pub mod terrain;
pub mod filter;
pub mod painter;
pub mod config;
