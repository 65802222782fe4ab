//! Uniform random heightmap generator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::{GeneratorConfig, GeneratorError, InitialGenerator};
use crate::terrain::HeightGrid;

/// Generates a heightmap where every tile height is drawn independently and
/// uniformly from `[min_height, max_height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomHeightmap {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Lower bound of the sampled height range.
    pub min_height: f32,
    /// Upper bound of the sampled height range.
    pub max_height: f32,
    /// Random seed for reproducible generation.
    pub seed: u64,
}

impl Default for RandomHeightmap {
    fn default() -> Self {
        Self {
            width: 8,
            height: 12,
            min_height: 0.0,
            max_height: 2.0,
            seed: 42,
        }
    }
}

impl RandomHeightmap {
    /// Creates a generator for the given extents and height range.
    pub fn new(width: u32, height: u32, min_height: f32, max_height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            min_height,
            max_height,
            seed,
        }
    }
}

impl InitialGenerator for RandomHeightmap {
    fn name(&self) -> &str {
        "Random Heightmap"
    }

    fn generate(&self) -> Result<HeightGrid, GeneratorError> {
        if self.min_height > self.max_height {
            return Err(GeneratorError::InvalidBounds(
                self.min_height,
                self.max_height,
            ));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let count = (self.width as usize) * (self.height as usize);
        let heights: Vec<f32> = (0..count)
            .map(|_| rng.random_range(self.min_height..=self.max_height))
            .collect();

        Ok(HeightGrid::from_heights(self.width, self.height, heights))
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::RandomHeightmap(self.clone())
    }
}
