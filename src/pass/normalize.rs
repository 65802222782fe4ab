//! Normalize pass: rescale heights onto the context bounds.

use super::{Pass, PassConfig};
use crate::terrain::{HeightGrid, MapContext};

/// Affinely rescales the grid's current height range onto
/// `[ctx.min_height, ctx.max_height]`.
///
/// A flat grid (zero height range) maps every tile to `ctx.min_height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizePass;

impl Pass for NormalizePass {
    fn name(&self) -> &str {
        "Normalize"
    }

    fn apply(&self, grid: &mut HeightGrid, ctx: &MapContext) {
        let Some((min, max)) = grid.height_range() else {
            return;
        };

        let target_min = ctx.min_height;
        let target_range = ctx.max_height - ctx.min_height;

        if max > min {
            let range = max - min;
            for h in grid.heights_mut() {
                *h = target_min + (*h - min) / range * target_range;
            }
        } else {
            for h in grid.heights_mut() {
                *h = target_min;
            }
        }
    }

    fn config(&self) -> PassConfig {
        PassConfig::Normalize
    }
}
