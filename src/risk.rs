//! BMI and risk derivation
//!
//! This module computes the BMI and the three heuristic risk scores:
//! - Obesity: a fixed percentage per BMI band
//! - Cardiovascular: additive chain over activity, BMI, and hydration
//! - Hypertension: additive chain over mood, screen time, sleep, and activity
//!
//! Unlike the composite score's first-match bands, the risk chains are
//! additive: every applicable dimension contributes to the subtotal, with
//! if/else exclusivity only within a single dimension.

use crate::types::{DailyInput, ObesityLevel, Profile, RiskLabels, RiskLevel, RiskMetrics};

/// Upper clamp applied to every risk percentage
pub const RISK_CEILING: u8 = 95;

/// Compute BMI from weight (kg) and height (cm), rounded to one decimal
/// place. All band thresholds are compared against the rounded value.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    (raw * 10.0).round() / 10.0
}

/// Risk profiler deriving the three risk percentages and their bands
pub struct RiskProfiler;

impl RiskProfiler {
    /// Assess all risks for one check-in against the rounded BMI
    pub fn assess(bmi: f64, input: &DailyInput) -> (RiskMetrics, RiskLabels) {
        let obesity = ObesityLevel::from_bmi(bmi);
        let cardiovascular_risk = cardiovascular_risk(bmi, input);
        let hypertension_risk = hypertension_risk(input);

        let metrics = RiskMetrics {
            obesity_risk: obesity.risk_percentage(),
            cardiovascular_risk,
            hypertension_risk,
        };
        let labels = RiskLabels {
            obesity,
            cardiovascular: RiskLevel::from_percentage(cardiovascular_risk),
            hypertension: RiskLevel::from_percentage(hypertension_risk),
        };
        (metrics, labels)
    }

    /// Convenience wrapper computing the BMI from the profile first
    pub fn assess_profile(profile: &Profile, input: &DailyInput) -> (f64, RiskMetrics, RiskLabels) {
        let bmi = compute_bmi(profile.weight, profile.height);
        let (metrics, labels) = Self::assess(bmi, input);
        (bmi, metrics, labels)
    }
}

/// Cardiovascular risk: activity, BMI, and hydration dimensions plus a
/// constant +10 base, clamped at the ceiling
fn cardiovascular_risk(bmi: f64, input: &DailyInput) -> u8 {
    let mut subtotal: u32 = 0;

    if input.activity < 15.0 {
        subtotal += 30;
    } else if input.activity < 30.0 {
        subtotal += 20;
    } else if input.activity < 45.0 {
        subtotal += 10;
    }

    if bmi >= 30.0 {
        subtotal += 30;
    } else if bmi >= 25.0 {
        subtotal += 15;
    }

    if input.water < 4 {
        subtotal += 15;
    } else if input.water < 6 {
        subtotal += 8;
    }

    (subtotal + 10).min(u32::from(RISK_CEILING)) as u8
}

/// Hypertension risk: mood, screen time, sleep, and activity dimensions plus
/// a constant +5 base, clamped at the ceiling
fn hypertension_risk(input: &DailyInput) -> u8 {
    let mut subtotal: u32 = 0;

    if input.mood >= 4 {
        subtotal += 25;
    } else if input.mood >= 3 {
        subtotal += 12;
    }

    if input.screen_time > 8.0 {
        subtotal += 20;
    } else if input.screen_time > 6.0 {
        subtotal += 15;
    } else if input.screen_time > 4.0 {
        subtotal += 8;
    }

    if input.sleep < 5.0 {
        subtotal += 20;
    } else if input.sleep < 7.0 {
        subtotal += 10;
    }

    if input.activity < 20.0 {
        subtotal += 15;
    }

    (subtotal + 5).min(u32::from(RISK_CEILING)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_active_day() -> DailyInput {
        DailyInput {
            mood: 3,
            sleep: 8.0,
            activity: 60.0,
            water: 8,
            screen_time: 2.0,
            posture_score: 85,
        }
    }

    #[test]
    fn test_bmi_rounding() {
        // 60 / 1.65^2 = 22.038... -> 22.0
        assert_eq!(compute_bmi(60.0, 165.0), 22.0);
        // 68 / 1.65^2 = 24.977... rounds up to 25.0, crossing the band edge
        assert_eq!(compute_bmi(68.0, 165.0), 25.0);
        assert_eq!(ObesityLevel::from_bmi(compute_bmi(68.0, 165.0)), ObesityLevel::Moderate);
    }

    #[test]
    fn test_bmi_zero_height_is_non_finite() {
        // The calculator is total; the boundary validates height before this
        // value can reach a report
        assert!(compute_bmi(60.0, 0.0).is_infinite());
        assert_eq!(ObesityLevel::from_bmi(f64::INFINITY), ObesityLevel::VeryHigh);
    }

    #[test]
    fn test_cardiovascular_floor_is_base_only() {
        // Active, hydrated, lean: every dimension contributes zero
        let risk = cardiovascular_risk(22.0, &make_active_day());
        assert_eq!(risk, 10);
        assert_eq!(RiskLevel::from_percentage(risk), RiskLevel::Low);
    }

    #[test]
    fn test_cardiovascular_worst_case_clamps_to_ceiling() {
        let input = DailyInput {
            activity: 0.0,
            water: 0,
            ..make_active_day()
        };
        // 30 + 30 + 15 + 10 = 85 for an obese BMI
        assert_eq!(cardiovascular_risk(32.0, &input), 85);
        assert!(cardiovascular_risk(f64::INFINITY, &input) <= RISK_CEILING);
    }

    #[test]
    fn test_cardiovascular_chain_is_additive() {
        // Moderate in each dimension: 20 (activity) + 15 (bmi) + 8 (water) + 10
        let input = DailyInput {
            activity: 20.0,
            water: 5,
            ..make_active_day()
        };
        assert_eq!(cardiovascular_risk(26.0, &input), 53);
    }

    #[test]
    fn test_cardiovascular_monotone_in_activity() {
        let base = make_active_day();
        let mut previous = u8::MAX;
        for minutes in [0.0, 10.0, 14.9, 15.0, 29.0, 30.0, 44.0, 45.0, 60.0, 120.0] {
            let input = DailyInput {
                activity: minutes,
                ..base.clone()
            };
            let risk = cardiovascular_risk(22.0, &input);
            assert!(
                risk <= previous,
                "risk increased from {} to {} at {} minutes",
                previous,
                risk,
                minutes
            );
            previous = risk;
        }
    }

    #[test]
    fn test_hypertension_floor_is_base_only() {
        let input = DailyInput {
            mood: 1,
            sleep: 8.0,
            activity: 30.0,
            screen_time: 2.0,
            ..make_active_day()
        };
        assert_eq!(hypertension_risk(&input), 5);
    }

    #[test]
    fn test_hypertension_worst_case_clamps_to_ceiling() {
        let input = DailyInput {
            mood: 5,
            sleep: 3.0,
            activity: 0.0,
            screen_time: 12.0,
            ..make_active_day()
        };
        // 25 + 20 + 20 + 15 + 5 = 85
        assert_eq!(hypertension_risk(&input), 85);
    }

    #[test]
    fn test_hypertension_screen_time_dimension() {
        let base = make_active_day();
        let at = |hours: f64| {
            hypertension_risk(&DailyInput {
                screen_time: hours,
                ..base.clone()
            })
        };
        // mood 3 contributes 12, sleep/activity contribute 0; base 5
        assert_eq!(at(4.0), 17);
        assert_eq!(at(4.1), 25);
        assert_eq!(at(6.1), 32);
        assert_eq!(at(8.1), 37);
    }

    #[test]
    fn test_assess_pairs_metrics_with_labels() {
        let (metrics, labels) = RiskProfiler::assess(22.0, &make_active_day());
        assert_eq!(metrics.obesity_risk, 10);
        assert_eq!(labels.obesity, ObesityLevel::Low);
        assert_eq!(metrics.cardiovascular_risk, 10);
        assert_eq!(labels.cardiovascular, RiskLevel::Low);
        assert_eq!(metrics.hypertension_risk, 17);
        assert_eq!(labels.hypertension, RiskLevel::Low);
    }

    #[test]
    fn test_assess_profile_uses_rounded_bmi() {
        let profile = Profile {
            weight: 68.0,
            height: 165.0,
            ..Profile::default()
        };
        let (bmi, metrics, labels) = RiskProfiler::assess_profile(&profile, &make_active_day());
        assert_eq!(bmi, 25.0);
        assert_eq!(labels.obesity, ObesityLevel::Moderate);
        assert_eq!(metrics.obesity_risk, 55);
    }
}
