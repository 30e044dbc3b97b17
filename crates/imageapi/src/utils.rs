use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;

pub fn detect_mime_type<P: AsRef<Path>>(path: P) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("image/png")
        .to_string()
}

pub async fn download_image(url: &str) -> Result<Vec<u8>> {
    let client = Client::new();

    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", url))?
        .error_for_status()
        .with_context(|| format!("Non-success HTTP status from {}", url))?;

    let bytes = resp
        .bytes()
        .await
        .context("Failed to read response bytes")?;

    Ok(bytes.to_vec())
}

pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
