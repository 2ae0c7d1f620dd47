// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Perimeter integrity scanning

use image::DynamicImage;

use super::{Finding, Severity};

/// Scan a site photo for perimeter integrity issues.
///
/// Placeholder implementation. A real detector would trace fence and gate
/// lines, flag discontinuities, and check for unauthorized access points.
/// Until then this returns a single fixed finding so clients can integrate
/// against the final response shape.
pub fn scan(_image: &DynamicImage) -> Vec<Finding> {
    vec![Finding {
        kind: "Perimeter Gap".to_string(),
        location: (100, 200),
        severity: Severity::High,
        description: "Potential gap in perimeter fence".to_string(),
    }]
}
