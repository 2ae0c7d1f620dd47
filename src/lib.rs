// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod detect;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{analyze_handler, AnalyzeResponse, VulnerabilityRecord};
pub use api::{create_app, start_server, ApiConfig, AppState};
pub use api::{ApiError, ErrorResponse};
pub use detect::{AnalysisReport, Analyzer, Finding, Severity};
pub use vision::{decode_image_bytes, detect_format, ImageError, ImageInfo};
