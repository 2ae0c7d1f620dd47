// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
// Version information for the Sitewatch node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-stub-detectors-2025-08-25";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-25";

/// Detectors available in this version
pub const DETECTORS: &[&str] = &["perimeter-gap", "camera-coverage"];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Sitewatch Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}
