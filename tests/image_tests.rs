use pretty_assertions::assert_eq;
use rck_sdk::Error;
use rck_sdk::image::GenerateParams;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{client_for, received_bodies};

fn generate_params() -> GenerateParams {
    GenerateParams {
        prompt: "a red fox in the snow".to_string(),
        composition: "rule of thirds".to_string(),
        lighting: "golden hour".to_string(),
        style: "watercolor".to_string(),
    }
}

#[tokio::test]
async fn generate_returns_typed_images() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sd2is/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "end_point": {
                "images": [
                    {"url": "http://x/1.png", "imageData": "", "index": 0, "size": 1024, "mimeType": "image/png"},
                    {"url": "", "imageData": "aGVsbG8=", "index": 1, "size": 2048, "mimeType": "image/png"}
                ],
                "count": 2,
                "status": "success"
            }
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .image
        .generate(generate_params())
        .await
        .unwrap();

    assert!(response.success());
    assert_eq!(response.count, 2);
    assert_eq!(response.images.len(), 2);

    let first = &response.images[0];
    assert!(first.has_data());
    assert_eq!(first.url, "http://x/1.png");
    assert_eq!(first.size, 1024);
    assert_eq!(first.mime_type, "image/png");

    let second = &response.images[1];
    assert!(second.has_data());
    assert_eq!(second.image_data, "aGVsbG8=");
    assert_eq!(second.index, 1);

    // The raw decoded body stays available for diagnostics.
    assert_eq!(response.raw_data["end_point"]["count"], json!(2));
}

#[tokio::test]
async fn generate_sends_renamed_composition_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sd2is/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "end_point": {"images": [], "count": 0, "status": "success"}
        })))
        .mount(&server)
        .await;

    client_for(&server)
        .image
        .generate(generate_params())
        .await
        .unwrap();

    let bodies = received_bodies(&server).await;
    let body = &bodies[0];
    assert_eq!(
        body["start_point"]["startPoint"],
        json!("a red fox in the snow")
    );
    assert_eq!(body["path"]["frame_Composition"], json!("rule of thirds"));
    assert!(body["path"].get("composition").is_none());
    assert_eq!(body["path"]["lighting"], json!("golden hour"));
    assert_eq!(body["path"]["style"], json!("watercolor"));
}

#[tokio::test]
async fn empty_fields_fail_without_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"end_point": {}})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    for field in ["prompt", "composition", "lighting", "style"] {
        let mut params = generate_params();
        match field {
            "prompt" => params.prompt.clear(),
            "composition" => params.composition.clear(),
            "lighting" => params.lighting.clear(),
            _ => params.style.clear(),
        }

        match client.image.generate(params).await.unwrap_err() {
            Error::Validation { field: reported, .. } => assert_eq!(reported, field),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_end_point_yields_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sd2is/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "end_point": {"images": "not an array", "count": 1, "status": "success"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .image
        .generate(generate_params())
        .await
        .unwrap_err();

    match err {
        Error::Api { message, .. } => {
            assert_eq!(message, "failed to parse API response into ImageResponse")
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_end_point_defaults_to_unsuccessful_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sd2is/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"something_else": 1})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .image
        .generate(generate_params())
        .await
        .unwrap();

    assert!(!response.success());
    assert_eq!(response.count, 0);
    assert!(response.images.is_empty());
}
