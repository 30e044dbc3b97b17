pub mod openai;

use anyhow::Result;

use crate::types::{EditedImage, ImageClient, ImageEditRequest, ImageProvider};

pub async fn create_image_edit(
    client: &ImageClient,
    request: ImageEditRequest,
) -> Result<Vec<EditedImage>> {
    match client.provider() {
        ImageProvider::OpenAI => openai::edit(client, request).await,
    }
}
