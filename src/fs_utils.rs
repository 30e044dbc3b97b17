use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::OutpaintConfig;
use crate::error::{OutpaintError, Result};

/// Creates `path` (and parents) unless it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| OutpaintError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    info!("folder {} created", path.display());
    Ok(())
}

/// Destination for the result at `index` (zero-based).
///
/// A single-variant run writes the configured name as is. Multi-variant runs
/// suffix each file with its 1-based position so no variant overwrites
/// another.
pub fn output_path(config: &OutpaintConfig, index: usize) -> PathBuf {
    let name = &config.output_image_name;
    if config.number_of_images <= 1 {
        return config.dest_folder.join(name);
    }

    let original = Path::new(name);
    let stem = original
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("outputimage");
    let file_name = match original.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_{}.{ext}", index + 1),
        None => format!("{stem}_{}.png", index + 1),
    };
    config.dest_folder.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("rgba").join("deeper");

        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dest");
        std::fs::write(&file, b"not a folder").unwrap();

        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, OutpaintError::CreateDir { .. }));
    }

    #[test]
    fn test_single_variant_keeps_plain_name() {
        let config = OutpaintConfig::default();
        assert_eq!(output_path(&config, 0), PathBuf::from("dest/outputimage.png"));
    }

    #[test]
    fn test_multiple_variants_are_indexed() {
        let config = OutpaintConfig {
            number_of_images: 3,
            ..OutpaintConfig::default()
        };
        assert_eq!(output_path(&config, 0), PathBuf::from("dest/outputimage_1.png"));
        assert_eq!(output_path(&config, 2), PathBuf::from("dest/outputimage_3.png"));

        let renamed = OutpaintConfig {
            number_of_images: 2,
            output_image_name: "result.jpg".to_string(),
            ..OutpaintConfig::default()
        };
        assert_eq!(output_path(&renamed, 1), PathBuf::from("dest/result_2.jpg"));
    }
}
