//! Terrain data module.
//!
//! Provides the core HeightGrid and MapContext data structures shared by
//! generators, passes and the tessellator.

mod grid;

pub use grid::{HeightGrid, MapContext};
