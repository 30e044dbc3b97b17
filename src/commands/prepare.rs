use std::path::Path;

use crate::config::OutpaintConfig;
use crate::error::{OutpaintError, Result};
use crate::fs_utils::ensure_dir;
use crate::image_ops::prepare_canvas;

/// Centers `input` on a transparent `width`x`height` canvas and stores it as
/// both the source and the mask image of `config`, so the transparent border
/// becomes the area to outpaint.
pub fn prepare_inputs(config: &OutpaintConfig, input: &Path, width: u32, height: u32) -> Result<()> {
    if !input.is_file() {
        return Err(OutpaintError::MissingInput {
            path: input.to_path_buf(),
        });
    }
    if width == 0 || height == 0 {
        return Err(OutpaintError::InvalidConfig {
            name: "canvas size",
            reason: format!("must be non-zero, got {width}x{height}"),
        });
    }

    ensure_dir(&config.src_folder)?;
    let src_path = config.src_image_path();
    let mask_path = config.mask_image_path();
    prepare_canvas(input, &[&src_path, &mask_path], width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_prepared_inputs_pass_dimension_check() {
        let dir = tempfile::tempdir().unwrap();
        let sample = dir.path().join("sample.png");
        RgbImage::from_pixel(40, 20, Rgb([9, 9, 9])).save(&sample).unwrap();
        let config = OutpaintConfig {
            src_folder: dir.path().join("src"),
            ..OutpaintConfig::default()
        };

        prepare_inputs(&config, &sample, 100, 50).unwrap();

        let src = image::image_dimensions(config.src_image_path()).unwrap();
        let mask = image::image_dimensions(config.mask_image_path()).unwrap();
        assert_eq!(src, (100, 50));
        assert_eq!(src, mask);
    }

    #[test]
    fn test_missing_sample_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutpaintConfig {
            src_folder: dir.path().join("src"),
            ..OutpaintConfig::default()
        };

        let err = prepare_inputs(&config, &dir.path().join("nope.png"), 10, 10).unwrap_err();
        assert!(matches!(err, OutpaintError::MissingInput { .. }));
        assert!(!config.src_folder.exists());
    }
}
