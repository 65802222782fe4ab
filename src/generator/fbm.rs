//! Fractal Brownian motion heightmap generator.

use serde::{Deserialize, Serialize};
use simdnoise::NoiseBuilder;

use super::{GeneratorConfig, GeneratorError, InitialGenerator};
use crate::terrain::HeightGrid;

/// Generates a heightmap from multi-octave fractal noise.
///
/// Noise output is rescaled so the produced heights span exactly
/// `[min_height, max_height]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FbmHeightmap {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Lower bound of the output height range.
    pub min_height: f32,
    /// Upper bound of the output height range.
    pub max_height: f32,
    /// Number of noise octaves (4-8 typical).
    pub octaves: u8,
    /// Base frequency of the noise.
    pub frequency: f32,
    /// Frequency multiplier per octave (typically 2.0).
    pub lacunarity: f32,
    /// Amplitude decay per octave (0.4-0.6 typical).
    pub gain: f32,
    /// Random seed for reproducible generation.
    pub seed: i32,
}

impl Default for FbmHeightmap {
    fn default() -> Self {
        Self {
            width: 8,
            height: 12,
            min_height: 0.0,
            max_height: 2.0,
            octaves: 5,
            frequency: 0.1,
            lacunarity: 2.0,
            gain: 0.5,
            seed: 42,
        }
    }
}

impl FbmHeightmap {
    /// Creates a generator with the given extents and height range, using
    /// the default noise parameters.
    pub fn new(width: u32, height: u32, min_height: f32, max_height: f32, seed: i32) -> Self {
        Self {
            width,
            height,
            min_height,
            max_height,
            seed,
            ..Default::default()
        }
    }
}

impl InitialGenerator for FbmHeightmap {
    fn name(&self) -> &str {
        "Fbm Heightmap"
    }

    fn generate(&self) -> Result<HeightGrid, GeneratorError> {
        if self.min_height > self.max_height {
            return Err(GeneratorError::InvalidBounds(
                self.min_height,
                self.max_height,
            ));
        }

        if self.width == 0 || self.height == 0 {
            return Ok(HeightGrid::new(self.width, self.height));
        }

        let heights = NoiseBuilder::fbm_2d(self.width as usize, self.height as usize)
            .with_seed(self.seed)
            .with_freq(self.frequency)
            .with_octaves(self.octaves)
            .with_lacunarity(self.lacunarity)
            .with_gain(self.gain)
            .generate_scaled(self.min_height, self.max_height);

        Ok(HeightGrid::from_heights(self.width, self.height, heights))
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::FbmHeightmap(self.clone())
    }
}
