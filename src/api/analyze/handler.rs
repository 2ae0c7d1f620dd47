// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Analyze endpoint handler

use axum::{extract::State, Json};
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use super::response::AnalyzeResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::decode_image_bytes;

/// POST /api/analyze - Scan an uploaded site photo for security issues
///
/// Accepts a multipart form with an `image` field and returns the findings
/// of the perimeter and camera-coverage detectors.
///
/// # Errors
/// - 400 Bad Request: no `image` field in the form
/// - 500 Internal Server Error: image could not be decoded or analysis failed
pub async fn analyze_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut image_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::AnalysisFailure(e.to_string()))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::AnalysisFailure(e.to_string()))?;
            image_bytes = Some(bytes);
            break;
        }
    }

    let bytes = image_bytes.ok_or_else(|| {
        warn!("Analyze request without an image field");
        ApiError::MissingImage
    })?;

    let (image, image_info) = decode_image_bytes(&bytes).map_err(|e| {
        warn!("Failed to decode uploaded image: {}", e);
        ApiError::AnalysisFailure(e.to_string())
    })?;

    debug!(
        "Decoded image: {}x{}, {} bytes",
        image_info.width, image_info.height, image_info.size_bytes
    );

    let report = state.analyzer.analyze(&image);

    info!(
        "Analysis complete: {} perimeter, {} camera coverage findings",
        report.perimeter.len(),
        report.camera_coverage.len()
    );

    Ok(Json(AnalyzeResponse::from(report)))
}
