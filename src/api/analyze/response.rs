// Copyright (c) 2025 Sitewatch
// SPDX-License-Identifier: BUSL-1.1
//! Analyze response types

use serde::{Deserialize, Serialize};

use crate::detect::{AnalysisReport, Finding, Severity};

/// One reported finding on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    /// Short category label
    #[serde(rename = "type")]
    pub kind: String,
    /// Pixel coordinates rendered as "(x, y)"
    pub location: String,
    pub severity: Severity,
    pub description: String,
}

impl From<Finding> for VulnerabilityRecord {
    fn from(finding: Finding) -> Self {
        let (x, y) = finding.location;
        Self {
            kind: finding.kind,
            location: format!("({}, {})", x, y),
            severity: finding.severity,
            description: finding.description,
        }
    }
}

/// Aggregated JSON payload returned by POST /api/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub perimeter_vulnerabilities: Vec<VulnerabilityRecord>,
    pub camera_coverage_vulnerabilities: Vec<VulnerabilityRecord>,
    /// Sum of the two list lengths
    pub total_vulnerabilities: usize,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        let total = report.total();
        Self {
            perimeter_vulnerabilities: report.perimeter.into_iter().map(Into::into).collect(),
            camera_coverage_vulnerabilities: report
                .camera_coverage
                .into_iter()
                .map(Into::into)
                .collect(),
            total_vulnerabilities: total,
        }
    }
}
