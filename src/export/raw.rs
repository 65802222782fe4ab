//! RAW format export for game engine compatibility.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::terrain::HeightGrid;

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid height range: min ({0}) >= max ({1})")]
    InvalidHeightRange(f32, f32),
}

/// RAW export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawFormat {
    /// 16-bit unsigned integer, little-endian (Unity default).
    #[default]
    R16LittleEndian,
    /// 16-bit unsigned integer, big-endian.
    R16BigEndian,
    /// 32-bit float, little-endian (high precision).
    R32Float,
}

/// Exports a heightmap grid as a RAW file.
///
/// R16 formats normalize heights into `[min_height, max_height]`; R32 writes
/// the stored f32 values verbatim.
///
/// # Arguments
/// * `grid` - The heightmap to export
/// * `path` - Output file path
/// * `format` - RAW format (R16 or R32)
/// * `min_height` - Minimum height for normalization (R16 only)
/// * `max_height` - Maximum height for normalization (R16 only)
pub fn export_grid_raw(
    grid: &HeightGrid,
    path: &Path,
    format: RawFormat,
    min_height: f32,
    max_height: f32,
) -> Result<(), RawExportError> {
    if format != RawFormat::R32Float && min_height >= max_height {
        return Err(RawExportError::InvalidHeightRange(min_height, max_height));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let range = max_height - min_height;

    match format {
        RawFormat::R16LittleEndian => {
            for &height in grid.heights() {
                let normalized = ((height - min_height) / range).clamp(0.0, 1.0);
                let value = (normalized * 65535.0) as u16;
                writer.write_all(&value.to_le_bytes())?;
            }
        }
        RawFormat::R16BigEndian => {
            for &height in grid.heights() {
                let normalized = ((height - min_height) / range).clamp(0.0, 1.0);
                let value = (normalized * 65535.0) as u16;
                writer.write_all(&value.to_be_bytes())?;
            }
        }
        RawFormat::R32Float => {
            for &height in grid.heights() {
                writer.write_all(&height.to_le_bytes())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Returns the expected file size for a RAW export.
pub fn expected_file_size(width: u32, height: u32, format: RawFormat) -> u64 {
    let tiles = (width as u64) * (height as u64);
    match format {
        RawFormat::R16LittleEndian | RawFormat::R16BigEndian => tiles * 2,
        RawFormat::R32Float => tiles * 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_grid_raw_r16() {
        let grid = HeightGrid::from_heights(4, 2, (0..8).map(|i| i as f32 / 7.0).collect());

        let dir = tempdir().unwrap();
        let path = dir.path().join("heights.raw");

        export_grid_raw(&grid, &path, RawFormat::R16LittleEndian, 0.0, 1.0).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert_eq!(
            metadata.len(),
            expected_file_size(4, 2, RawFormat::R16LittleEndian)
        );
    }

    #[test]
    fn test_export_grid_raw_r32() {
        let grid = HeightGrid::from_heights(2, 2, vec![-1.0, 0.0, 0.5, 1.0]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("heights.raw");

        export_grid_raw(&grid, &path, RawFormat::R32Float, 0.0, 0.0).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len() as u64, expected_file_size(2, 2, RawFormat::R32Float));

        // R32 writes the stored values verbatim.
        let first = f32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        assert_eq!(first, -1.0);
    }

    #[test]
    fn test_r16_content_correctness() {
        let grid = HeightGrid::from_heights(2, 1, vec![0.0, 2.0]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("heights.raw");

        export_grid_raw(&grid, &path, RawFormat::R16LittleEndian, 0.0, 2.0).unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(u16::from_le_bytes([data[0], data[1]]), 0);
        assert_eq!(u16::from_le_bytes([data[2], data[3]]), 65535);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let grid = HeightGrid::new(2, 2);
        let dir = tempdir().unwrap();
        let path = dir.path().join("heights.raw");

        assert!(matches!(
            export_grid_raw(&grid, &path, RawFormat::R16LittleEndian, 1.0, -1.0),
            Err(RawExportError::InvalidHeightRange(_, _))
        ));
    }
}
