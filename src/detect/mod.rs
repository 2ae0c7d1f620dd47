// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Site photo analysis
//!
//! This module provides:
//! - Perimeter integrity scanning
//! - Camera coverage scanning
//!
//! Both detectors are placeholders: they return fixed findings until real
//! vision backends land.

pub mod camera;
pub mod perimeter;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// How urgent a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One detected issue in a site photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Short category label, e.g. "Perimeter Gap"
    pub kind: String,
    /// Pixel coordinates of the issue
    pub location: (u32, u32),
    pub severity: Severity,
    /// Human-readable explanation
    pub description: String,
}

/// Aggregated output of one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub perimeter: Vec<Finding>,
    pub camera_coverage: Vec<Finding>,
}

impl AnalysisReport {
    /// Total number of findings across all detectors.
    pub fn total(&self) -> usize {
        self.perimeter.len() + self.camera_coverage.len()
    }
}

/// Runs every registered detector over a decoded photo.
#[derive(Debug, Clone, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, image: &DynamicImage) -> AnalysisReport {
        AnalysisReport {
            perimeter: perimeter::scan(image),
            camera_coverage: camera::scan(image),
        }
    }
}
