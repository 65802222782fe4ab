//! Smoothing pass: iterated neighbour relaxation.

use serde::{Deserialize, Serialize};

use super::{Pass, PassConfig};
use crate::terrain::{HeightGrid, MapContext};

/// Relaxes each tile towards the mean of itself and its 4-connected
/// neighbours, repeated for a configurable number of iterations.
///
/// Edge tiles average over in-range neighbours only; the grid is never
/// padded or wrapped. Each iteration reads from the previous iteration's
/// heights (double-buffered), so the result is independent of tile order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothPass {
    /// Number of relaxation iterations.
    pub iterations: u32,
}

impl Default for SmoothPass {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}

impl Pass for SmoothPass {
    fn name(&self) -> &str {
        "Smooth"
    }

    fn apply(&self, grid: &mut HeightGrid, _ctx: &MapContext) {
        if grid.is_empty() {
            return;
        }

        let width = grid.width() as usize;
        let height = grid.height() as usize;
        let mut next = vec![0.0f32; grid.tile_count()];

        for _ in 0..self.iterations {
            {
                let current = grid.heights();
                for y in 0..height {
                    for x in 0..width {
                        let mut sum = current[y * width + x];
                        let mut count = 1.0f32;

                        if x > 0 {
                            sum += current[y * width + x - 1];
                            count += 1.0;
                        }
                        if x + 1 < width {
                            sum += current[y * width + x + 1];
                            count += 1.0;
                        }
                        if y > 0 {
                            sum += current[(y - 1) * width + x];
                            count += 1.0;
                        }
                        if y + 1 < height {
                            sum += current[(y + 1) * width + x];
                            count += 1.0;
                        }

                        next[y * width + x] = sum / count;
                    }
                }
            }

            grid.heights_mut().copy_from_slice(&next);
        }
    }

    fn config(&self) -> PassConfig {
        PassConfig::Smooth(self.clone())
    }
}
