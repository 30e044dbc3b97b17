//! The remote edit service seam.

use std::path::Path;

use async_trait::async_trait;
use imageapi::{ImageClient, ImageEditRequest, ImageFile, ImageProvider};
use tracing::debug;

use crate::error::{OutpaintError, Result};
use crate::models::EditResult;

/// Everything the runner needs from the outside world.
#[async_trait]
pub trait EditService: Send + Sync {
    /// Submits the normalized image and mask for one edit call.
    async fn create_edit(
        &self,
        image: &Path,
        mask: &Path,
        prompt: &str,
        n: u32,
    ) -> Result<Vec<EditResult>>;

    /// Fetches the bytes behind a result URL.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

/// [`EditService`] backed by the OpenAI image edit endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiEditService {
    client: ImageClient,
    size: Option<String>,
}

impl OpenAiEditService {
    pub fn new(
        api_key: &str,
        endpoint: &str,
        model: Option<String>,
        size: Option<String>,
    ) -> Self {
        Self {
            client: ImageClient::new(ImageProvider::OpenAI, api_key, endpoint, model),
            size,
        }
    }
}

#[async_trait]
impl EditService for OpenAiEditService {
    async fn create_edit(
        &self,
        image: &Path,
        mask: &Path,
        prompt: &str,
        n: u32,
    ) -> Result<Vec<EditResult>> {
        let image = ImageFile::from_path(image)
            .await
            .map_err(OutpaintError::Remote)?;
        let mask = ImageFile::from_path(mask)
            .await
            .map_err(OutpaintError::Remote)?;

        let mut request = ImageEditRequest::new(image, mask, prompt, n);
        if let Some(size) = &self.size {
            request = request.with_size(size.clone());
        }

        let edited = imageapi::create_image_edit(&self.client, request)
            .await
            .map_err(OutpaintError::Remote)?;
        debug!(count = edited.len(), "image edit returned results");

        Ok(edited.into_iter().map(EditResult::from).collect())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        imageapi::download_image(url)
            .await
            .map_err(|cause| OutpaintError::Download {
                url: url.to_string(),
                cause,
            })
    }
}
