//! HeightGrid and MapContext data structures.

use serde::{Deserialize, Serialize};

/// A rectangular grid of per-tile heights.
///
/// Heights are stored in row-major order (`y * width + x`). The grid is
/// created by an initial generator, mutated in place by passes, and read-only
/// once handed to the tessellator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    width: u32,
    height: u32,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Creates a new grid with all tile heights set to 0.0.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            heights: vec![0.0; size],
        }
    }

    /// Creates a grid from an existing height buffer.
    ///
    /// # Panics
    /// Panics if `heights.len() != width * height`.
    pub fn from_heights(width: u32, height: u32, heights: Vec<f32>) -> Self {
        assert_eq!(
            heights.len(),
            (width as usize) * (height as usize),
            "height buffer length must equal width * height"
        );
        Self {
            width,
            height,
            heights,
        }
    }

    /// Returns the grid width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of tiles.
    pub fn tile_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the height at the given tile coordinate.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn height_at(&self, x: u32, y: u32) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "tile ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        self.heights[(y * self.width + x) as usize]
    }

    /// Sets the height at the given tile coordinate.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn set_height(&mut self, x: u32, y: u32, value: f32) {
        assert!(
            x < self.width && y < self.height,
            "tile ({x}, {y}) out of range for {}x{} grid",
            self.width,
            self.height
        );
        self.heights[(y * self.width + x) as usize] = value;
    }

    /// Returns the raw height buffer in row-major order.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Returns the raw height buffer mutably.
    ///
    /// The buffer length is fixed; passes mutate heights through this slice
    /// but can never resize the grid.
    pub fn heights_mut(&mut self) -> &mut [f32] {
        &mut self.heights
    }

    /// Returns (min, max) over all tile heights, or None for an empty grid.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        if self.heights.is_empty() {
            return None;
        }

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &h in &self.heights {
            min = min.min(h);
            max = max.max(h);
        }

        Some((min, max))
    }

    /// Returns an iterator over all (x, y) tile coordinates in row-major order.
    pub fn tile_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width;
        (0..self.height).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

/// Shared generation context handed to every pass.
///
/// Carries the grid extents and the advertised height bounds. The bounds are
/// not physically enforced on stored heights; a pass may choose to clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapContext {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Lower height bound advertised to passes.
    pub min_height: f32,
    /// Upper height bound advertised to passes.
    pub max_height: f32,
}

impl Default for MapContext {
    fn default() -> Self {
        Self {
            width: 8,
            height: 12,
            min_height: 0.0,
            max_height: 2.0,
        }
    }
}

impl MapContext {
    /// Creates a context with the given extents and height bounds.
    pub fn new(width: u32, height: u32, min_height: f32, max_height: f32) -> Self {
        Self {
            width,
            height,
            min_height,
            max_height,
        }
    }
}
