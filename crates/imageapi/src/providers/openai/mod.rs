mod api;
pub mod models;

pub use api::send_image_edit;

use anyhow::Result;

use crate::types::{EditedImage, ImageClient, ImageEditRequest};

pub async fn edit(client: &ImageClient, request: ImageEditRequest) -> Result<Vec<EditedImage>> {
    let response = send_image_edit(client, request).await?;
    Ok(response
        .data
        .into_iter()
        .map(|item| EditedImage {
            url: item.url,
            b64_json: item.b64_json,
            revised_prompt: item.revised_prompt,
        })
        .collect())
}
