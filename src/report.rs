//! Check-in report encoding
//!
//! This module encodes computed metrics and selected recommendations into a
//! versioned report payload for the presentation layer. The payload carries
//! producer metadata and a computation timestamp alongside the display
//! attributes (labels, colors, emoji) resolved from the closed enums.

use crate::error::EngineError;
use crate::types::{HealthMetrics, Recommendation, ScoreBreakdown};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Health status with its display attributes resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub label: String,
    pub color: String,
    pub emoji: String,
}

/// One risk entry: percentage plus resolved band label and color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub percentage: u8,
    pub label: String,
    pub color: String,
}

/// The three risk entries of a check-in report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RisksReport {
    pub obesity: RiskReport,
    pub cardiovascular: RiskReport,
    pub hypertension: RiskReport,
}

/// Complete check-in report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
    pub bmi: f64,
    pub status: StatusReport,
    pub risks: RisksReport,
    pub recommendations: Vec<Recommendation>,
}

/// Report encoder producing versioned check-in payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Encode metrics and recommendations into a report payload
    pub fn encode(
        &self,
        metrics: &HealthMetrics,
        recommendations: &[Recommendation],
    ) -> CheckInReport {
        let producer = ReportProducer {
            name: PRODUCER_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            instance_id: self.instance_id.clone(),
        };

        let status = StatusReport {
            label: metrics.status.label().to_string(),
            color: metrics.status.color().to_string(),
            emoji: metrics.status.emoji().to_string(),
        };

        let risks = RisksReport {
            obesity: RiskReport {
                percentage: metrics.risk_metrics.obesity_risk,
                label: metrics.risk_labels.obesity.label().to_string(),
                color: metrics.risk_labels.obesity.color().to_string(),
            },
            cardiovascular: RiskReport {
                percentage: metrics.risk_metrics.cardiovascular_risk,
                label: metrics.risk_labels.cardiovascular.label().to_string(),
                color: metrics.risk_labels.cardiovascular.color().to_string(),
            },
            hypertension: RiskReport {
                percentage: metrics.risk_metrics.hypertension_risk,
                label: metrics.risk_labels.hypertension.label().to_string(),
                color: metrics.risk_labels.hypertension.color().to_string(),
            },
        };

        CheckInReport {
            report_version: REPORT_VERSION.to_string(),
            producer,
            computed_at_utc: Utc::now().to_rfc3339(),
            score: metrics.score,
            breakdown: metrics.breakdown,
            bmi: metrics.bmi,
            status,
            risks,
            recommendations: recommendations.to_vec(),
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(
        &self,
        metrics: &HealthMetrics,
        recommendations: &[Recommendation],
    ) -> Result<String, EngineError> {
        let report = self.encode(metrics, recommendations);
        serde_json::to_string_pretty(&report).map_err(EngineError::JsonError)
    }
}
