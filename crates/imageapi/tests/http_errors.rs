mod common;

use common::MockServer;
use imageapi::{
    ImageClient, ImageEditRequest, ImageFile, ImageProvider, create_image_edit, download_image,
};

fn edit_request() -> ImageEditRequest {
    ImageEditRequest::new(
        ImageFile::new("_src.png", vec![137, 80, 78, 71]),
        ImageFile::new("_mask.png", vec![137, 80, 78, 71]),
        "high mountain",
        2,
    )
}

fn client_for(server: &MockServer) -> ImageClient {
    ImageClient::new(ImageProvider::OpenAI, "sk-test", server.url("/v1"), None)
}

#[tokio::test]
async fn download_reports_server_error_status() {
    let server = MockServer::start(500, "text/plain", "boom").await;

    let err = download_image(&server.url("/result.png")).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("Non-success HTTP status"), "{message}");
    assert!(message.contains("500"), "{message}");
    assert_eq!(server.requests(), vec!["GET /result.png HTTP/1.1"]);
}

#[tokio::test]
async fn download_returns_body_bytes() {
    let server = MockServer::start(200, "image/png", "not-really-a-png").await;

    let bytes = download_image(&server.url("/result.png")).await.unwrap();

    assert_eq!(bytes, b"not-really-a-png");
}

#[tokio::test]
async fn edit_reports_status_and_body_on_server_error() {
    let server = MockServer::start(
        500,
        "application/json",
        r#"{"error":{"message":"upstream overloaded"}}"#,
    )
    .await;

    let err = create_image_edit(&client_for(&server), edit_request())
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(
        message.contains("OpenAI image edit failed: status 500"),
        "{message}"
    );
    assert!(message.contains("upstream overloaded"), "{message}");
    assert_eq!(server.requests(), vec!["POST /v1/images/edits HTTP/1.1"]);
}

#[tokio::test]
async fn edit_rejects_non_json_success_body() {
    let server = MockServer::start(200, "text/html", "<html>maintenance</html>").await;

    let err = create_image_edit(&client_for(&server), edit_request())
        .await
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(
        message.contains("Failed to decode OpenAI image edit JSON"),
        "{message}"
    );
    assert!(message.contains("maintenance"), "{message}");
}

#[tokio::test]
async fn edit_maps_every_returned_variant() {
    let server = MockServer::start(
        200,
        "application/json",
        r#"{"created":1,"data":[{"url":"https://cdn/a.png","revised_prompt":"taller"},{"b64_json":"aGk="}]}"#,
    )
    .await;

    let edited = create_image_edit(&client_for(&server), edit_request())
        .await
        .unwrap();

    assert_eq!(edited.len(), 2);
    assert_eq!(edited[0].url.as_deref(), Some("https://cdn/a.png"));
    assert_eq!(edited[0].revised_prompt.as_deref(), Some("taller"));
    assert_eq!(edited[1].b64_json.as_deref(), Some("aGk="));
}
