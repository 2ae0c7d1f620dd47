// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod errors;
pub mod http_server;

pub use analyze::{analyze_handler, AnalyzeResponse, VulnerabilityRecord};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{create_app, start_server, ApiConfig, AppState, HealthResponse};
