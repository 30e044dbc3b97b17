use tracing::debug;

use crate::config::OutpaintConfig;
use crate::constants::API_KEY_ENV;
use crate::error::{OutpaintError, Result};
use crate::fs_utils::ensure_dir;
use crate::image_ops::read_dimensions;

/// Fails fast when the run cannot possibly succeed.
///
/// Checks, in order: the configured values, the credential, that both input
/// images exist, then creates the working and destination folders and
/// compares the image dimensions.
pub fn validate_environment(config: &OutpaintConfig) -> Result<()> {
    config.check()?;

    if config.api_key().is_none() {
        return Err(OutpaintError::MissingCredential { var: API_KEY_ENV });
    }

    let src_path = config.src_image_path();
    let mask_path = config.mask_image_path();
    for path in [&src_path, &mask_path] {
        if !path.is_file() {
            return Err(OutpaintError::MissingInput { path: path.clone() });
        }
    }

    ensure_dir(&config.rgba_folder)?;
    ensure_dir(&config.dest_folder)?;

    let image_dims = read_dimensions(&src_path)?;
    let mask_dims = read_dimensions(&mask_path)?;
    if image_dims != mask_dims {
        return Err(OutpaintError::DimensionMismatch {
            image_dims,
            mask_dims,
        });
    }

    debug!(width = image_dims.0, height = image_dims.1, "inputs validated");
    Ok(())
}
