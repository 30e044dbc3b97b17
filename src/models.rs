use std::path::PathBuf;

use serde::Deserialize;

/// On-disk run settings. Every field is optional; missing ones fall back to
/// the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub src_folder_path: Option<PathBuf>,
    pub src_image_name: Option<String>,
    pub mask_image_name: Option<String>,
    pub rgba_folder_path: Option<PathBuf>,
    pub dest_folder_path: Option<PathBuf>,
    pub output_image_name: Option<String>,
    pub prompt: Option<String>,
    pub number_of_images: Option<u32>,
    pub model: Option<String>,
    pub size: Option<String>,
    pub endpoint: Option<String>,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub max_concurrent_downloads: Option<usize>,
}

/// One generated variant handed back by the edit service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditResult {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    /// The prompt the service actually used, when it rewrote ours.
    pub revised_prompt: Option<String>,
}

impl EditResult {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

impl From<imageapi::EditedImage> for EditResult {
    fn from(image: imageapi::EditedImage) -> Self {
        Self {
            url: image.url,
            b64_json: image.b64_json,
            revised_prompt: image.revised_prompt,
        }
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub requested: u32,
    pub received: usize,
    pub outputs: Vec<PathBuf>,
}
