//! Procedural terrain pipeline.
//!
//! This crate provides a two-stage heightmap pipeline (an initial generator
//! followed by an ordered sequence of transform passes) and the tessellation
//! that turns the finished heightmap into a triangle mesh with interpolated
//! corner heights.

pub mod catalog;
pub mod export;
pub mod generator;
pub mod mesh;
pub mod pass;
pub mod ruleset;
pub mod terrain;

pub use catalog::{CatalogError, PassCatalog};
pub use generator::{
    FbmHeightmap, GeneratorConfig, GeneratorError, InitialGenerator, RandomHeightmap,
};
pub use mesh::{build_mesh, Mesh};
pub use pass::{FlattenPass, NormalizePass, Pass, PassConfig, SmoothPass};
pub use ruleset::{Ruleset, RulesetConfig, RulesetError};
pub use terrain::{HeightGrid, MapContext};
