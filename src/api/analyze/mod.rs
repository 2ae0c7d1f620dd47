// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Analyze API endpoint module
//!
//! Provides POST /api/analyze for scanning uploaded site photos.

pub mod handler;
pub mod response;

pub use handler::analyze_handler;
pub use response::{AnalyzeResponse, VulnerabilityRecord};
