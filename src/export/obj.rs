//! Wavefront OBJ export for tessellated meshes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur during OBJ export.
#[derive(Error, Debug)]
pub enum ObjExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Exports a mesh as a Wavefront OBJ file.
///
/// Writes one `v` line per vertex, one `vt` line per UV and one `f` line per
/// triangle (OBJ indices are 1-based). An empty mesh produces a file with a
/// header and no geometry.
pub fn export_mesh_obj(mesh: &Mesh, path: &Path) -> Result<(), ObjExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# mapgen terrain mesh")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for tri in mesh.triangles.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_mesh;
    use crate::terrain::HeightGrid;
    use tempfile::tempdir;

    #[test]
    fn test_export_mesh_obj() {
        let grid = HeightGrid::from_heights(2, 1, vec![1.0, 3.0]);
        let mesh = build_mesh(&grid);

        let dir = tempdir().unwrap();
        let path = dir.path().join("terrain.obj");

        export_mesh_obj(&mesh, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let v_lines = content.lines().filter(|l| l.starts_with("v ")).count();
        let vt_lines = content.lines().filter(|l| l.starts_with("vt ")).count();
        let f_lines = content.lines().filter(|l| l.starts_with("f ")).count();

        assert_eq!(v_lines, 8);
        assert_eq!(vt_lines, 8);
        assert_eq!(f_lines, 8);

        // OBJ indices are 1-based.
        assert!(content.contains("f 1/1 4/4 3/3"));
    }

    #[test]
    fn test_export_empty_mesh() {
        let mesh = build_mesh(&HeightGrid::new(0, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.obj");

        export_mesh_obj(&mesh, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.lines().any(|l| l.starts_with("v ")));
        assert!(!content.lines().any(|l| l.starts_with("f ")));
    }
}
