// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Camera coverage scanning

use image::DynamicImage;

use super::{Finding, Severity};

/// Scan a site photo for areas outside camera coverage.
///
/// Placeholder implementation, same contract as [`super::perimeter::scan`]:
/// ignores the pixels and reports one fixed blind spot.
pub fn scan(_image: &DynamicImage) -> Vec<Finding> {
    vec![Finding {
        kind: "Camera Blind Spot".to_string(),
        location: (300, 400),
        severity: Severity::Medium,
        description: "Area not covered by security cameras".to_string(),
    }]
}
