//! Pixel-format conversion, resizing and canvas preparation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{
    imageops, imageops::FilterType, DynamicImage, ImageError, ImageReader, Rgba, RgbaImage,
};
use tracing::info;

use crate::error::{OutpaintError, Result};

/// Reads the pixel dimensions from the image header. The format is taken
/// from the file contents, not its extension.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    reader(path)
        .and_then(|reader| reader.into_dimensions())
        .map_err(|source| OutpaintError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// Converts the image at `input` to RGBA and writes it to `output`.
///
/// The input file is never modified. A failed write may leave a partial file
/// at `output`.
pub fn normalize_to_rgba(input: &Path, output: &Path) -> Result<()> {
    let img = open(input)?;
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    save(&rgba, output)?;
    info!("{} converted to RGBA at {}", input.display(), output.display());
    Ok(())
}

/// Stretches the image at `path` to exactly `width`x`height` and overwrites
/// it.
pub fn resize_in_place(path: &Path, width: u32, height: u32) -> Result<()> {
    let img = open(path)?;
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);
    save(&resized, path)?;
    info!("{} resized to {width}x{height}", path.display());
    Ok(())
}

/// Centers `image` on a fully transparent canvas. Parts that fall outside the
/// canvas are clipped.
pub fn center_on_canvas(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0]));
    let top = image.to_rgba8();
    let x = (i64::from(width) - i64::from(top.width())) / 2;
    let y = (i64::from(height) - i64::from(top.height())) / 2;
    imageops::overlay(&mut canvas, &top, x, y);
    canvas
}

/// Builds the outpainting canvas from `input` and writes it to every path in
/// `outputs`.
pub fn prepare_canvas(input: &Path, outputs: &[&Path], width: u32, height: u32) -> Result<()> {
    let img = open(input)?;
    let canvas = DynamicImage::ImageRgba8(center_on_canvas(&img, width, height));
    for output in outputs {
        save(&canvas, output)?;
        info!("canvas {width}x{height} written to {}", output.display());
    }
    Ok(())
}

fn open(path: &Path) -> Result<DynamicImage> {
    reader(path)
        .and_then(|reader| reader.decode())
        .map_err(|source| OutpaintError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

fn reader(path: &Path) -> std::result::Result<ImageReader<BufReader<File>>, ImageError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

fn save(img: &DynamicImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| OutpaintError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
