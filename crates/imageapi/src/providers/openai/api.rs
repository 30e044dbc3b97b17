use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::types::{ImageClient, ImageEditRequest, ImageFile};
use crate::utils::detect_mime_type;

use super::models::ImageEditResponse;

pub async fn send_image_edit(
    client: &ImageClient,
    request: ImageEditRequest,
) -> Result<ImageEditResponse> {
    let url = edits_url(client.endpoint());
    let requested = request.n;
    let form = build_edit_form(request, client.default_model())?;

    debug!(%url, n = requested, "sending image edit request");

    let http_client = Client::new();
    let response = http_client
        .post(url)
        .bearer_auth(client.api_key())
        .multipart(form)
        .send()
        .await
        .context("OpenAI image edit request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Failed to read OpenAI image edit response body")?;

    if !status.is_success() {
        return Err(anyhow!(
            "OpenAI image edit failed: status {} body {}",
            status,
            response_text
        ));
    }

    serde_json::from_str(&response_text)
        .with_context(|| format!("Failed to decode OpenAI image edit JSON: {response_text}"))
}

fn edits_url(endpoint: &str) -> String {
    format!("{}/images/edits", endpoint.trim_end_matches('/'))
}

fn build_edit_form(request: ImageEditRequest, model: Option<&str>) -> Result<Form> {
    let mut form = Form::new()
        .part("image", file_part(request.image)?)
        .part("mask", file_part(request.mask)?)
        .text("prompt", request.prompt)
        .text("n", request.n.to_string());

    if let Some(model) = model {
        form = form.text("model", model.to_string());
    }
    if let Some(size) = request.size {
        form = form.text("size", size);
    }

    Ok(form)
}

fn file_part(file: ImageFile) -> Result<Part> {
    let mime = detect_mime_type(&file.file_name);
    Part::bytes(file.bytes)
        .file_name(file.file_name.clone())
        .mime_str(&mime)
        .with_context(|| format!("Invalid MIME type {mime} for {}", file.file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_url_trims_trailing_slash() {
        assert_eq!(
            edits_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/images/edits"
        );
        assert_eq!(
            edits_url("http://localhost:8080"),
            "http://localhost:8080/images/edits"
        );
    }

    #[test]
    fn test_file_part_accepts_png() {
        let file = ImageFile::new("_src.png", vec![0x89, b'P', b'N', b'G']);
        assert!(file_part(file).is_ok());
    }

    #[test]
    fn test_build_edit_form_with_optional_fields() {
        let request = ImageEditRequest::new(
            ImageFile::new("_src.png", vec![1, 2, 3]),
            ImageFile::new("_mask.png", vec![4, 5, 6]),
            "high mountain",
            2,
        )
        .with_size("1024x1024");

        let form = build_edit_form(request, Some("dall-e-2")).unwrap();
        assert!(!form.boundary().is_empty());
    }
}
