use anyhow::{Context, Result};
use std::path::Path;

#[derive(Clone, Copy, Debug)]
pub enum ImageProvider {
    OpenAI,
}

/// An image file ready to be sent as one multipart field.
#[derive(Clone, Debug)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image file: {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image.png")
            .to_string();
        Ok(Self { file_name, bytes })
    }
}

#[derive(Clone, Debug)]
pub struct ImageEditRequest {
    pub image: ImageFile,
    pub mask: ImageFile,
    pub prompt: String,
    pub n: u32,
    pub size: Option<String>,
}

impl ImageEditRequest {
    pub fn new(image: ImageFile, mask: ImageFile, prompt: impl Into<String>, n: u32) -> Self {
        Self {
            image,
            mask,
            prompt: prompt.into(),
            n,
            size: None,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// One generated variant as returned by the provider.
#[derive(Clone, Debug, Default)]
pub struct EditedImage {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}

#[derive(Clone)]
pub struct ImageClient {
    pub(crate) provider: ImageProvider,
    pub(crate) api_key: String,
    pub(crate) endpoint: String,
    pub(crate) default_model: Option<String>,
}

impl ImageClient {
    pub fn new(
        provider: ImageProvider,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        default_model: Option<String>,
    ) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            default_model,
        }
    }

    pub fn provider(&self) -> ImageProvider {
        self.provider
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_model(&self) -> Option<&str> {
        self.default_model.as_deref()
    }
}

impl std::fmt::Debug for ImageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClient")
            .field("provider", &self.provider)
            .field("endpoint", &self.endpoint)
            .field("default_model", &self.default_model)
            .finish_non_exhaustive()
    }
}
