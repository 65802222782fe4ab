//! Flatten pass: clamp tiles on one side of a threshold.

use serde::{Deserialize, Serialize};

use super::{Pass, PassConfig};
use crate::terrain::{HeightGrid, MapContext};

/// Clamps every tile on the "wrong" side of a threshold to the threshold
/// value, leaving tiles on the selected side untouched.
///
/// The kept side is selected by a strict comparison: with `keep_greater` a
/// tile survives if its height is strictly greater than the threshold,
/// otherwise if strictly less. A tile exactly at the threshold is rewritten
/// to the threshold value it already holds, so the boundary choice is not
/// observable. Applying the same pass twice yields the same grid as applying
/// it once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlattenPass {
    /// The height every clamped tile is set to.
    pub threshold_height: f32,
    /// If true, tiles above the threshold are kept; otherwise tiles below.
    pub keep_greater: bool,
}

impl Default for FlattenPass {
    fn default() -> Self {
        Self {
            threshold_height: 1.0,
            keep_greater: false,
        }
    }
}

impl Pass for FlattenPass {
    fn name(&self) -> &str {
        "Flatten"
    }

    fn apply(&self, grid: &mut HeightGrid, _ctx: &MapContext) {
        let threshold = self.threshold_height;

        for h in grid.heights_mut() {
            let keep = if self.keep_greater {
                *h > threshold
            } else {
                *h < threshold
            };

            if !keep {
                *h = threshold;
            }
        }
    }

    fn config(&self) -> PassConfig {
        PassConfig::Flatten(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x2(values: [f32; 4]) -> HeightGrid {
        HeightGrid::from_heights(2, 2, values.to_vec())
    }

    #[test]
    fn test_keep_greater_clamps_low_tiles() {
        let mut grid = grid_2x2([0.2, 1.0, 1.4, 2.0]);
        let pass = FlattenPass {
            threshold_height: 1.0,
            keep_greater: true,
        };

        pass.apply(&mut grid, &MapContext::default());

        assert_eq!(grid.heights(), &[1.0, 1.0, 1.4, 2.0]);
    }

    #[test]
    fn test_keep_lower_clamps_high_tiles() {
        let mut grid = grid_2x2([0.2, 1.0, 1.4, 2.0]);
        let pass = FlattenPass {
            threshold_height: 1.0,
            keep_greater: false,
        };

        pass.apply(&mut grid, &MapContext::default());

        assert_eq!(grid.heights(), &[0.2, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_idempotence() {
        let pass = FlattenPass {
            threshold_height: 0.7,
            keep_greater: true,
        };
        let ctx = MapContext::default();

        let mut once = grid_2x2([0.1, 0.7, 0.9, 1.3]);
        pass.apply(&mut once, &ctx);

        let mut twice = once.clone();
        pass.apply(&mut twice, &ctx);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_threshold_tile_unchanged_either_way() {
        let ctx = MapContext::default();

        for keep_greater in [false, true] {
            let mut grid = grid_2x2([1.0, 1.0, 1.0, 1.0]);
            let pass = FlattenPass {
                threshold_height: 1.0,
                keep_greater,
            };
            pass.apply(&mut grid, &ctx);
            assert_eq!(grid.heights(), &[1.0, 1.0, 1.0, 1.0]);
        }
    }
}
