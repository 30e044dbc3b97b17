//! Immutable run configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;

use crate::constants::{
    API_KEY_ENV, DEFAULT_NUMBER_OF_IMAGES, DEFAULT_OPENAI_ENDPOINT, DEFAULT_PROMPT, DEST_DIR_NAME,
    ENDPOINT_ENV, MASK_IMAGE_FILE, MAX_CONCURRENT_DOWNLOADS, MAX_NUMBER_OF_IMAGES,
    NORMALIZED_PREFIX, OUTPUT_IMAGE_FILE, RGBA_DIR_NAME, SRC_DIR_NAME, SRC_IMAGE_FILE,
    TARGET_HEIGHT, TARGET_WIDTH,
};
use crate::error::{OutpaintError, Result};
use crate::models::ConfigFile;

/// Settings for one outpainting run. Built once at startup and only read
/// afterwards.
#[derive(Clone)]
pub struct OutpaintConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: Option<String>,
    pub size: Option<String>,
    pub src_folder: PathBuf,
    pub src_image_name: String,
    pub mask_image_name: String,
    pub rgba_folder: PathBuf,
    pub dest_folder: PathBuf,
    pub output_image_name: String,
    pub prompt: String,
    pub number_of_images: u32,
    pub target_width: u32,
    pub target_height: u32,
    pub max_concurrent_downloads: usize,
}

impl Default for OutpaintConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            model: None,
            size: None,
            src_folder: PathBuf::from(SRC_DIR_NAME),
            src_image_name: SRC_IMAGE_FILE.to_string(),
            mask_image_name: MASK_IMAGE_FILE.to_string(),
            rgba_folder: PathBuf::from(RGBA_DIR_NAME),
            dest_folder: PathBuf::from(DEST_DIR_NAME),
            output_image_name: OUTPUT_IMAGE_FILE.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            number_of_images: DEFAULT_NUMBER_OF_IMAGES,
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            max_concurrent_downloads: MAX_CONCURRENT_DOWNLOADS,
        }
    }
}

impl std::fmt::Debug for OutpaintConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutpaintConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("size", &self.size)
            .field("src_folder", &self.src_folder)
            .field("src_image_name", &self.src_image_name)
            .field("mask_image_name", &self.mask_image_name)
            .field("rgba_folder", &self.rgba_folder)
            .field("dest_folder", &self.dest_folder)
            .field("output_image_name", &self.output_image_name)
            .field("prompt", &self.prompt)
            .field("number_of_images", &self.number_of_images)
            .field("target_width", &self.target_width)
            .field("target_height", &self.target_height)
            .field("max_concurrent_downloads", &self.max_concurrent_downloads)
            .finish()
    }
}

impl OutpaintConfig {
    /// Overlay the values present in a config file.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(path) = file.src_folder_path {
            self.src_folder = path;
        }
        if let Some(path) = file.rgba_folder_path {
            self.rgba_folder = path;
        }
        if let Some(path) = file.dest_folder_path {
            self.dest_folder = path;
        }
        if let Some(name) = non_empty(file.src_image_name) {
            self.src_image_name = name;
        }
        if let Some(name) = non_empty(file.mask_image_name) {
            self.mask_image_name = name;
        }
        if let Some(name) = non_empty(file.output_image_name) {
            self.output_image_name = name;
        }
        if let Some(prompt) = non_empty(file.prompt) {
            self.prompt = prompt;
        }
        if let Some(endpoint) = non_empty(file.endpoint) {
            self.endpoint = endpoint;
        }
        if let Some(model) = non_empty(file.model) {
            self.model = Some(model);
        }
        if let Some(size) = non_empty(file.size) {
            self.size = Some(size);
        }
        if let Some(n) = file.number_of_images {
            self.number_of_images = n;
        }
        if let Some(width) = file.target_width {
            self.target_width = width;
        }
        if let Some(height) = file.target_height {
            self.target_height = height;
        }
        if let Some(limit) = file.max_concurrent_downloads {
            self.max_concurrent_downloads = limit;
        }
        self
    }

    /// Reads the credential and an optional endpoint override from the
    /// process environment.
    pub fn with_env(mut self) -> Self {
        self.api_key = std::env::var(API_KEY_ENV).ok();
        if let Some(endpoint) = non_empty(std::env::var(ENDPOINT_ENV).ok()) {
            self.endpoint = endpoint;
        }
        self
    }

    /// The credential, if present and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn src_image_path(&self) -> PathBuf {
        self.src_folder.join(&self.src_image_name)
    }

    pub fn mask_image_path(&self) -> PathBuf {
        self.src_folder.join(&self.mask_image_name)
    }

    pub fn normalized_src_path(&self) -> PathBuf {
        self.rgba_folder
            .join(format!("{NORMALIZED_PREFIX}{}", self.src_image_name))
    }

    pub fn normalized_mask_path(&self) -> PathBuf {
        self.rgba_folder
            .join(format!("{NORMALIZED_PREFIX}{}", self.mask_image_name))
    }

    /// Rejects values no run could succeed with.
    pub fn check(&self) -> Result<()> {
        if !(1..=MAX_NUMBER_OF_IMAGES).contains(&self.number_of_images) {
            return Err(OutpaintError::InvalidConfig {
                name: "numberOfImages",
                reason: format!(
                    "must be between 1 and {MAX_NUMBER_OF_IMAGES}, got {}",
                    self.number_of_images
                ),
            });
        }
        if self.target_width == 0 || self.target_height == 0 {
            return Err(OutpaintError::InvalidConfig {
                name: "targetWidth/targetHeight",
                reason: format!(
                    "must be non-zero, got {}x{}",
                    self.target_width, self.target_height
                ),
            });
        }
        if self.prompt.trim().is_empty() {
            return Err(OutpaintError::InvalidConfig {
                name: "prompt",
                reason: "cannot be empty".to_string(),
            });
        }
        if ImageFormat::from_path(&self.output_image_name).is_err() {
            return Err(OutpaintError::InvalidConfig {
                name: "outputImageName",
                reason: format!(
                    "'{}' needs an image file extension such as .png",
                    self.output_image_name
                ),
            });
        }
        if self.max_concurrent_downloads == 0 {
            return Err(OutpaintError::InvalidConfig {
                name: "maxConcurrentDownloads",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Parses a JSON config file.
pub fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read config file '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Unable to parse config file '{}'", path.display()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
