//! Metrics calculation
//!
//! This module orchestrates the metrics stage: composite score, status tier,
//! BMI, and the three risk assessments, assembled into one [`HealthMetrics`]
//! record. Pure and total: fixed inputs always produce identical output, and
//! every branch has a fallback, so no input can fail.

use crate::risk::{compute_bmi, RiskProfiler};
use crate::score::ScoreCalculator;
use crate::types::{DailyInput, HealthMetrics, HealthStatus, Profile};

/// Compute all health metrics for one check-in.
///
/// Gender, waist, and hip ride along on the profile for display but do not
/// influence any formula.
pub fn compute_metrics(profile: &Profile, input: &DailyInput) -> HealthMetrics {
    let breakdown = ScoreCalculator::breakdown(input);
    let score = breakdown.total();
    let status = HealthStatus::from_score(score);

    let bmi = compute_bmi(profile.weight, profile.height);
    let (risk_metrics, risk_labels) = RiskProfiler::assess(bmi, input);

    HealthMetrics {
        score,
        bmi,
        status,
        breakdown,
        risk_metrics,
        risk_labels,
    }
}
