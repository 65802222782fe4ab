//! Heightmap transform passes.
//!
//! A pass is a named, parameterized, deterministic in-place transformation
//! applied to a heightmap as one pipeline stage. Passes never resize the
//! grid and perform no I/O.

mod flatten;
mod normalize;
mod smooth;

use serde::{Deserialize, Serialize};

use crate::terrain::{HeightGrid, MapContext};

pub use flatten::FlattenPass;
pub use normalize::NormalizePass;
pub use smooth::SmoothPass;

/// Trait for heightmap transform passes.
///
/// Each pass refines the grid produced by previous stages in place. The
/// trait-based design allows modular composition and easy extension with
/// new transform behaviors.
pub trait Pass: Send + Sync {
    /// Returns a human-readable name for the pass.
    fn name(&self) -> &str;

    /// Applies the transformation to the grid in place.
    ///
    /// # Arguments
    /// * `grid` - The heightmap to modify
    /// * `ctx` - Shared generation context (extents and height bounds),
    ///   read-only from the pass's perspective
    fn apply(&self, grid: &mut HeightGrid, ctx: &MapContext);

    /// Returns the serializable record describing this pass.
    fn config(&self) -> PassConfig;
}

impl std::fmt::Debug for dyn Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass").field("name", &self.name()).finish()
    }
}

/// Serializable pass description, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PassConfig {
    Flatten(FlattenPass),
    Smooth(SmoothPass),
    Normalize,
}

impl PassConfig {
    /// Builds a boxed pass from this record.
    pub fn build(&self) -> Box<dyn Pass> {
        match self {
            PassConfig::Flatten(p) => Box::new(p.clone()),
            PassConfig::Smooth(p) => Box::new(p.clone()),
            PassConfig::Normalize => Box::new(NormalizePass),
        }
    }
}
