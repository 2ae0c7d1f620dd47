// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1

//! Analyze endpoint tests for POST /api/analyze
//!
//! These tests verify that the analyze handler correctly:
//! - Rejects requests without an `image` multipart field (400)
//! - Returns the fixed findings for any decodable image (200)
//! - Reports decode failures with a JSON error body (500)
//! - Produces identical output regardless of image content

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use sitewatch_node::api::{create_app, AppState};
use std::io::Cursor;
use tower::util::ServiceExt; // for `oneshot`

const BOUNDARY: &str = "sitewatch-test-boundary";

/// Encode a solid-color image to the given format in memory
fn image_bytes(width: u32, height: u32, color: [u8; 3], format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .unwrap();
    buf.into_inner()
}

/// Build a multipart/form-data body carrying one file field
fn multipart_body(field_name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field_name, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn analyze_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_analyze_valid_png_returns_findings() {
    let app = create_app(AppState::new_for_test());

    let png = image_bytes(16, 16, [200, 30, 30], ImageFormat::Png);
    let request = analyze_request(multipart_body("image", "photo.png", &png));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["total_vulnerabilities"], 2);

    let perimeter = json["perimeter_vulnerabilities"].as_array().unwrap();
    assert_eq!(perimeter.len(), 1);
    assert_eq!(perimeter[0]["type"], "Perimeter Gap");
    assert_eq!(perimeter[0]["location"], "(100, 200)");
    assert_eq!(perimeter[0]["severity"], "High");
    assert_eq!(perimeter[0]["description"], "Potential gap in perimeter fence");

    let camera = json["camera_coverage_vulnerabilities"].as_array().unwrap();
    assert_eq!(camera.len(), 1);
    assert_eq!(camera[0]["type"], "Camera Blind Spot");
    assert_eq!(camera[0]["location"], "(300, 400)");
    assert_eq!(camera[0]["severity"], "Medium");
    assert_eq!(camera[0]["description"], "Area not covered by security cameras");
}

#[tokio::test]
async fn test_analyze_valid_jpeg_returns_findings() {
    let app = create_app(AppState::new_for_test());

    let jpeg = image_bytes(32, 24, [0, 120, 0], ImageFormat::Jpeg);
    let request = analyze_request(multipart_body("image", "photo.jpg", &jpeg));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["total_vulnerabilities"], 2);
}

#[tokio::test]
async fn test_analyze_missing_image_field_returns_400() {
    let app = create_app(AppState::new_for_test());

    // Well-formed multipart, but the file field has the wrong name
    let png = image_bytes(8, 8, [0, 0, 0], ImageFormat::Png);
    let request = analyze_request(multipart_body("photo", "photo.png", &png));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["error"], "No image provided");
}

#[tokio::test]
async fn test_analyze_empty_form_returns_400() {
    let app = create_app(AppState::new_for_test());

    let body = format!("--{}--\r\n", BOUNDARY).into_bytes();
    let request = analyze_request(body);

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["error"], "No image provided");
}

#[tokio::test]
async fn test_analyze_undecodable_bytes_returns_500() {
    let app = create_app(AppState::new_for_test());

    let garbage = vec![0x00, 0x01, 0x02, 0x03, 0xDE, 0xAD, 0xBE, 0xEF];
    let request = analyze_request(multipart_body("image", "photo.png", &garbage));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(!error.is_empty(), "Error message should not be empty");
}

#[tokio::test]
async fn test_analyze_truncated_png_returns_500() {
    let app = create_app(AppState::new_for_test());

    // Valid PNG magic but no decodable image behind it
    let truncated = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let request = analyze_request(multipart_body("image", "photo.png", &truncated));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_multi_megabyte_image_returns_findings() {
    let app = create_app(AppState::new_for_test());

    // Uncompressed 1200x1200 BMP is ~4.3MB: decodable, under the 10MB
    // ceiling, but well past axum's default 2MB body limit
    let bmp = image_bytes(1200, 1200, [90, 90, 90], ImageFormat::Bmp);
    assert!(bmp.len() > 2 * 1024 * 1024);
    let request = analyze_request(multipart_body("image", "photo.bmp", &bmp));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["total_vulnerabilities"], 2);
}

#[tokio::test]
async fn test_analyze_image_over_ceiling_returns_500() {
    let app = create_app(AppState::new_for_test());

    // Just over the 10MB image ceiling; rejected before decoding
    let oversized = vec![0u8; 10 * 1024 * 1024 + 1];
    let request = analyze_request(multipart_body("image", "photo.bin", &oversized));

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = response_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("too large"), "got error: {}", error);
}

#[tokio::test]
async fn test_analyze_output_is_input_independent() {
    let app = create_app(AppState::new_for_test());

    let small_red = image_bytes(4, 4, [255, 0, 0], ImageFormat::Png);
    let large_blue = image_bytes(640, 480, [0, 0, 255], ImageFormat::Png);

    let first = app
        .clone()
        .oneshot(analyze_request(multipart_body("image", "a.png", &small_red)))
        .await
        .unwrap();
    let second = app
        .oneshot(analyze_request(multipart_body("image", "b.png", &large_blue)))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first_json = response_json(first).await;
    let second_json = response_json(second).await;
    assert_eq!(
        first_json, second_json,
        "Findings should not depend on image content"
    );
}
