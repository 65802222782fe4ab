//! Export functionality for generated heightmaps and meshes.
//!
//! Inspection tooling for the pipeline's outputs: grayscale PNG and RAW
//! heightmap dumps, and a Wavefront OBJ dump of the tessellated mesh.

mod obj;
mod png;
mod raw;

pub use obj::{export_mesh_obj, ObjExportError};
pub use png::{export_grid_png, PngExportError, PngExportOptions};
pub use raw::{expected_file_size, export_grid_raw, RawExportError, RawFormat};
