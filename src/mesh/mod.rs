//! Grid-to-triangle-mesh tessellation.
//!
//! Turns a finished HeightGrid into renderable geometry. Every tile gets a
//! center vertex at its stored height plus four shared corner vertices whose
//! heights are interpolated from the neighbouring tiles, and is tessellated
//! as a closed fan of four triangles around the center:
//!
//! ```text
//!   (grid size 2x1, vertex indices)
//!
//!   2-------3-------4
//!   | \ t / | \   / |
//!   |  (0)  |  (1)  |      center vertices: 0, 1
//!   | /   \ | /   \ |      corner vertices: 2..8
//!   5-------6-------7
//! ```
//!
//! Consuming the mesh for display is the caller's responsibility.

use glam::{Vec2, Vec3};
use rayon::prelude::*;

use crate::terrain::HeightGrid;

/// Triangle mesh produced by tessellation.
///
/// `triangles` holds vertex indices, three per face. UVs are emitted as all
/// zeros; they are a placeholder kept for layout compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions: grid x/y map to world x/z, height to world y.
    pub vertices: Vec<Vec3>,
    /// One UV per vertex, all `(0, 0)`.
    pub uvs: Vec<Vec2>,
    /// Triangle vertex indices, length `3 * triangle_count()`.
    pub triangles: Vec<u32>,
}

impl Mesh {
    /// Creates a mesh with no vertices and no triangles.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            uvs: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangle faces.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// Tessellates a heightmap grid into a triangle mesh.
///
/// For a `w x h` grid the mesh has `w*h + (w+1)*(h+1)` vertices (one center
/// per tile, one corner per grid-line intersection) and `4*w*h` triangles
/// (a fan of four around each tile center). A zero-dimension grid yields the
/// empty mesh.
///
/// Vertex layout, relied upon by downstream consumers:
/// * indices `0 .. w*h`: tile centers, row-major, at `(x+0.5, height, y+0.5)`
/// * indices `w*h ..`: corners on a `(w+1) x (h+1)` row-major grid at
///   `(x, corner_height, y)`
pub fn build_mesh(grid: &HeightGrid) -> Mesh {
    if grid.is_empty() {
        return Mesh::empty();
    }

    let w = grid.width() as usize;
    let h = grid.height() as usize;

    let center_count = w * h;
    let corner_count = (w + 1) * (h + 1);
    let vertex_count = center_count + corner_count;

    let mut vertices = vec![Vec3::ZERO; vertex_count];
    let (centers, corners) = vertices.split_at_mut(center_count);

    centers.par_iter_mut().enumerate().for_each(|(i, v)| {
        let x = (i % w) as u32;
        let y = (i / w) as u32;
        *v = Vec3::new(
            x as f32 + 0.5,
            grid.height_at(x, y),
            y as f32 + 0.5,
        );
    });

    corners.par_iter_mut().enumerate().for_each(|(i, v)| {
        let x = (i % (w + 1)) as u32;
        let y = (i / (w + 1)) as u32;
        *v = Vec3::new(x as f32, corner_height(grid, x, y), y as f32);
    });

    let uvs = vec![Vec2::ZERO; vertex_count];

    // 4 triangles per tile, 3 indices each, emitted tile-major.
    let cvertex = center_count as u32;
    let mut triangles = vec![0u32; 12 * w * h];

    triangles
        .par_chunks_mut(12)
        .enumerate()
        .for_each(|(tile, tri)| {
            let x = (tile % w) as u32;
            let y = (tile / w) as u32;

            let center = tile as u32;
            let upper_left = cvertex + x + y * (w as u32 + 1);
            let upper_right = upper_left + 1;
            let lower_left = upper_left + w as u32 + 1;
            let lower_right = lower_left + 1;

            tri.copy_from_slice(&[
                center, upper_right, upper_left,
                center, lower_right, upper_right,
                center, lower_left, lower_right,
                center, upper_left, lower_left,
            ]);
        });

    Mesh {
        vertices,
        uvs,
        triangles,
    }
}

/// Computes the height of the corner vertex at grid-line intersection (x, y).
///
/// The corner touches up to four tiles diagonally; its height is the
/// arithmetic mean of those that are in range. A corner with no in-range
/// tile (cannot occur on a non-empty grid) defaults to 0.0.
fn corner_height(grid: &HeightGrid, x: u32, y: u32) -> f32 {
    let width = grid.width();
    let height = grid.height();

    let mut tiles: [Option<f32>; 4] = [None; 4];

    if x >= 1 && y >= 1 {
        tiles[0] = Some(grid.height_at(x - 1, y - 1));
    }
    if x < width && y >= 1 {
        tiles[1] = Some(grid.height_at(x, y - 1));
    }
    if x >= 1 && y < height {
        tiles[2] = Some(grid.height_at(x - 1, y));
    }
    if x < width && y < height {
        tiles[3] = Some(grid.height_at(x, y));
    }

    let mut sum = 0.0f32;
    let mut count = 0.0f32;
    for tile in tiles.into_iter().flatten() {
        sum += tile;
        count += 1.0;
    }

    if count != 0.0 {
        sum / count
    } else {
        0.0
    }
}
