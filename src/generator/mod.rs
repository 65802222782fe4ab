//! Initial heightmap generators.
//!
//! An initial generator produces a fresh HeightGrid from its own extents and
//! parameters; passes then refine that grid in place.

mod fbm;
mod random;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::terrain::HeightGrid;

pub use fbm::FbmHeightmap;
pub use random::RandomHeightmap;

/// Errors that can occur during initial generation.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("invalid height bounds: min ({0}) > max ({1})")]
    InvalidBounds(f32, f32),
}

/// Trait for initial heightmap generators.
///
/// Implementations produce a grid sized exactly to their configured extents.
/// Generation is deterministic for a given parameter set (stochastic
/// generators are seeded) and has no side effects beyond randomness
/// consumption.
pub trait InitialGenerator: Send + Sync {
    /// Returns a human-readable name for the generator.
    fn name(&self) -> &str;

    /// Produces a fresh heightmap grid.
    ///
    /// # Returns
    /// The generated grid, or a configuration error (e.g. inverted height
    /// bounds). Bounds are reported, never silently swapped.
    fn generate(&self) -> Result<HeightGrid, GeneratorError>;

    /// Returns the serializable record describing this generator.
    fn config(&self) -> GeneratorConfig;
}

/// Serializable generator description, tagged by kind.
///
/// This is the persisted form of a generator: a plain data record that is
/// human-inspectable and forward-compatible by its `kind` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    RandomHeightmap(RandomHeightmap),
    FbmHeightmap(FbmHeightmap),
}

impl GeneratorConfig {
    /// Builds a boxed generator from this record.
    pub fn build(&self) -> Box<dyn InitialGenerator> {
        match self {
            GeneratorConfig::RandomHeightmap(g) => Box::new(g.clone()),
            GeneratorConfig::FbmHeightmap(g) => Box::new(g.clone()),
        }
    }

    /// Returns the configured grid extents (width, height).
    pub fn extent(&self) -> (u32, u32) {
        match self {
            GeneratorConfig::RandomHeightmap(g) => (g.width, g.height),
            GeneratorConfig::FbmHeightmap(g) => (g.width, g.height),
        }
    }

    /// Returns the configured height bounds (min, max).
    pub fn bounds(&self) -> (f32, f32) {
        match self {
            GeneratorConfig::RandomHeightmap(g) => (g.min_height, g.max_height),
            GeneratorConfig::FbmHeightmap(g) => (g.min_height, g.max_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = GeneratorConfig::RandomHeightmap(RandomHeightmap::default());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"random_heightmap\""));

        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_build_matches_extent() {
        let config = GeneratorConfig::FbmHeightmap(FbmHeightmap::default());
        let generator = config.build();
        let grid = generator.generate().unwrap();
        assert_eq!((grid.width(), grid.height()), config.extent());
    }
}
