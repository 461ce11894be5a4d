//! Core types for the Wellscore engine
//!
//! This module defines the records that flow through the engine: the static
//! profile captured at signup, the daily check-in input, the computed health
//! metrics, and the closed status/risk classifications they carry.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Posture score applied when the posture scan is skipped or fails
pub const DEFAULT_POSTURE_SCORE: u8 = 82;

/// Gender recorded at signup (profile display only, never scored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Other => "other",
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Female
    }
}

/// Static profile captured at account creation
///
/// Immutable for the session until re-submitted. Waist and hip are collected
/// but unused by every current scoring rule; they stay inert on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Age in years
    pub age: u32,
    pub gender: Gender,
    /// Body weight (kg)
    pub weight: f64,
    /// Height (cm)
    pub height: f64,
    /// Waist circumference (cm)
    pub waist: f64,
    /// Hip circumference (cm)
    pub hip: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            age: 25,
            gender: Gender::Female,
            weight: 60.0,
            height: 165.0,
            waist: 70.0,
            hip: 95.0,
        }
    }
}

impl Profile {
    /// Reject out-of-domain fields before the record reaches the calculators.
    ///
    /// The calculators themselves are total; boundary callers validate so a
    /// zero height can never propagate a non-finite BMI into a report.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.age == 0 {
            return Err(EngineError::invalid("age", "must be greater than zero"));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(EngineError::invalid(
                "weight",
                format!("must be a positive number of kilograms, got {}", self.weight),
            ));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EngineError::invalid(
                "height",
                format!("must be a positive number of centimeters, got {}", self.height),
            ));
        }
        if !self.waist.is_finite() || self.waist < 0.0 {
            return Err(EngineError::invalid("waist", "must be a non-negative number"));
        }
        if !self.hip.is_finite() || self.hip < 0.0 {
            return Err(EngineError::invalid("hip", "must be a non-negative number"));
        }
        Ok(())
    }
}

/// One day's behavioral check-in
///
/// Created fresh each check-in cycle and discarded once metrics are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInput {
    /// Mood rating, 1 (best) to 5 (worst)
    pub mood: u8,
    /// Sleep duration (hours)
    pub sleep: f64,
    /// Physical activity (minutes)
    pub activity: f64,
    /// Water intake (glasses)
    pub water: u32,
    /// Screen time (hours)
    pub screen_time: f64,
    /// Posture score, 0-100, from the external scan or the default
    pub posture_score: u8,
}

impl Default for DailyInput {
    fn default() -> Self {
        Self {
            mood: 3,
            sleep: 0.0,
            activity: 0.0,
            water: 0,
            screen_time: 0.0,
            posture_score: DEFAULT_POSTURE_SCORE,
        }
    }
}

impl DailyInput {
    /// Reject out-of-domain fields before the record reaches the calculators.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=5).contains(&self.mood) {
            return Err(EngineError::invalid(
                "mood",
                format!("must be between 1 and 5, got {}", self.mood),
            ));
        }
        if !self.sleep.is_finite() || self.sleep < 0.0 {
            return Err(EngineError::invalid(
                "sleep",
                "must be a non-negative number of hours",
            ));
        }
        if !self.activity.is_finite() || self.activity < 0.0 {
            return Err(EngineError::invalid(
                "activity",
                "must be a non-negative number of minutes",
            ));
        }
        if !self.screen_time.is_finite() || self.screen_time < 0.0 {
            return Err(EngineError::invalid(
                "screen_time",
                "must be a non-negative number of hours",
            ));
        }
        if self.posture_score > 100 {
            return Err(EngineError::invalid(
                "posture_score",
                format!("must be at most 100, got {}", self.posture_score),
            ));
        }
        Ok(())
    }
}

/// Health status tier derived from the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl HealthStatus {
    /// Map a composite score to its status tier (non-overlapping thresholds)
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthStatus::Excellent
        } else if score >= 60 {
            HealthStatus::Good
        } else if score >= 40 {
            HealthStatus::Fair
        } else if score >= 20 {
            HealthStatus::Poor
        } else {
            HealthStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent Health",
            HealthStatus::Good => "Good Health",
            HealthStatus::Fair => "Fair Health - Needs Improvement",
            HealthStatus::Poor => "Poor Health - Action Required",
            HealthStatus::Critical => "Critical - Immediate Action Needed",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "#27ae60",
            HealthStatus::Good => "#2ecc71",
            HealthStatus::Fair => "#f39c12",
            HealthStatus::Poor => "#e67e22",
            HealthStatus::Critical => "#e74c3c",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "💪",
            HealthStatus::Good => "👍",
            HealthStatus::Fair => "⚠️",
            HealthStatus::Poor => "⚠️",
            HealthStatus::Critical => "🚨",
        }
    }
}

/// Risk band for the cardiovascular and hypertension scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Map a risk percentage to its band: <30 Low, <60 Moderate, else High
    pub fn from_percentage(pct: u8) -> Self {
        if pct < 30 {
            RiskLevel::Low
        } else if pct < 60 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#27ae60",
            RiskLevel::Moderate => "#f39c12",
            RiskLevel::High => "#e74c3c",
        }
    }
}

/// Obesity classification derived from the rounded BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObesityLevel {
    Underweight,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl ObesityLevel {
    /// Classify a BMI value. The input must already be rounded to one
    /// decimal place; bands compare against the rounded value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            ObesityLevel::Underweight
        } else if bmi < 25.0 {
            ObesityLevel::Low
        } else if bmi < 30.0 {
            ObesityLevel::Moderate
        } else if bmi < 35.0 {
            ObesityLevel::High
        } else {
            ObesityLevel::VeryHigh
        }
    }

    /// Fixed risk percentage carried by each band
    pub fn risk_percentage(&self) -> u8 {
        match self {
            ObesityLevel::Underweight => 30,
            ObesityLevel::Low => 10,
            ObesityLevel::Moderate => 55,
            ObesityLevel::High => 75,
            ObesityLevel::VeryHigh => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ObesityLevel::Underweight => "Underweight",
            ObesityLevel::Low => "Low",
            ObesityLevel::Moderate => "Moderate",
            ObesityLevel::High => "High",
            ObesityLevel::VeryHigh => "Very High",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ObesityLevel::Underweight => "#3498db",
            ObesityLevel::Low => "#27ae60",
            ObesityLevel::Moderate => "#f39c12",
            ObesityLevel::High => "#e74c3c",
            ObesityLevel::VeryHigh => "#c0392b",
        }
    }
}

/// Per-factor contributions to the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub sleep: u8,
    pub water: u8,
    pub activity: u8,
    pub screen_time: u8,
    pub mood: u8,
    pub posture: u8,
}

impl ScoreBreakdown {
    /// Sum of all factor contributions, clamped into [0, 100]
    pub fn total(&self) -> u8 {
        let sum = u32::from(self.sleep)
            + u32::from(self.water)
            + u32::from(self.activity)
            + u32::from(self.screen_time)
            + u32::from(self.mood)
            + u32::from(self.posture);
        sum.min(100) as u8
    }
}

/// Risk percentages, each clamped into [0, 95]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub obesity_risk: u8,
    pub cardiovascular_risk: u8,
    pub hypertension_risk: u8,
}

/// Risk band classifications paired with [`RiskMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLabels {
    pub obesity: ObesityLevel,
    pub cardiovascular: RiskLevel,
    pub hypertension: RiskLevel,
}

/// Computed health metrics for one check-in
///
/// Computed fresh on every calculator invocation; never mutated, only
/// replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Composite wellness score, 0-100
    pub score: u8,
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub status: HealthStatus,
    pub breakdown: ScoreBreakdown,
    pub risk_metrics: RiskMetrics,
    pub risk_labels: RiskLabels,
}

/// Advice category for a recommendation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceCategory {
    Weight,
    Activity,
    Hydration,
    ScreenTime,
    Sleep,
    Stress,
    Posture,
    HeartHealth,
}

impl AdviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceCategory::Weight => "weight",
            AdviceCategory::Activity => "activity",
            AdviceCategory::Hydration => "hydration",
            AdviceCategory::ScreenTime => "screen_time",
            AdviceCategory::Sleep => "sleep",
            AdviceCategory::Stress => "stress",
            AdviceCategory::Posture => "posture",
            AdviceCategory::HeartHealth => "heart_health",
        }
    }
}

/// One advice entry produced by the recommendation selector
///
/// The body may contain inline `<strong>` emphasis markup; the engine treats
/// it as opaque text for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: AdviceCategory,
    pub icon: String,
    pub title: String,
    pub body: String,
}

impl Recommendation {
    pub fn new(category: AdviceCategory, icon: &str, title: &str, body: &str) -> Self {
        Self {
            category,
            icon: icon.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    /// Single-string rendering with the title bolded, as the presentation
    /// layer's suggestion cards expect
    pub fn formatted(&self) -> String {
        format!("{} <strong>{}:</strong> {}", self.icon, self.title, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.name, "User");
        assert_eq!(profile.age, 25);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.weight, 60.0);
        assert_eq!(profile.height, 165.0);
        assert_eq!(profile.waist, 70.0);
        assert_eq!(profile.hip, 95.0);
    }

    #[test]
    fn test_default_daily_input_uses_default_posture() {
        let input = DailyInput::default();
        assert_eq!(input.mood, 3);
        assert_eq!(input.posture_score, DEFAULT_POSTURE_SCORE);
        assert_eq!(input.water, 0);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(HealthStatus::from_score(100), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(80), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(79), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(60), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(40), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(20), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_score(19), HealthStatus::Critical);
        assert_eq!(HealthStatus::from_score(0), HealthStatus::Critical);
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_percentage(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_percentage(30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(59), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_percentage(60), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(95), RiskLevel::High);
    }

    #[test]
    fn test_obesity_bands() {
        assert_eq!(ObesityLevel::from_bmi(18.4), ObesityLevel::Underweight);
        assert_eq!(ObesityLevel::from_bmi(18.5), ObesityLevel::Low);
        assert_eq!(ObesityLevel::from_bmi(24.9), ObesityLevel::Low);
        assert_eq!(ObesityLevel::from_bmi(25.0), ObesityLevel::Moderate);
        assert_eq!(ObesityLevel::from_bmi(29.9), ObesityLevel::Moderate);
        assert_eq!(ObesityLevel::from_bmi(30.0), ObesityLevel::High);
        assert_eq!(ObesityLevel::from_bmi(35.0), ObesityLevel::VeryHigh);
        assert_eq!(ObesityLevel::Underweight.risk_percentage(), 30);
        assert_eq!(ObesityLevel::VeryHigh.risk_percentage(), 90);
    }

    #[test]
    fn test_every_risk_level_has_a_color() {
        for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
            assert!(level.color().starts_with('#'));
        }
        for level in [
            ObesityLevel::Underweight,
            ObesityLevel::Low,
            ObesityLevel::Moderate,
            ObesityLevel::High,
            ObesityLevel::VeryHigh,
        ] {
            assert!(level.color().starts_with('#'));
        }
    }

    #[test]
    fn test_breakdown_total_clamps_to_100() {
        let breakdown = ScoreBreakdown {
            sleep: 25,
            water: 15,
            activity: 20,
            screen_time: 10,
            mood: 15,
            posture: 15,
        };
        assert_eq!(breakdown.total(), 100);

        let inflated = ScoreBreakdown {
            sleep: 200,
            ..breakdown
        };
        assert_eq!(inflated.total(), 100);
    }

    #[test]
    fn test_profile_validate_rejects_zero_height() {
        let profile = Profile {
            height: 0.0,
            ..Profile::default()
        };
        assert!(profile.validate().is_err());
        assert!(Profile::default().validate().is_ok());
    }

    #[test]
    fn test_daily_input_validate_rejects_out_of_domain() {
        let mut input = DailyInput::default();
        assert!(input.validate().is_ok());

        input.mood = 0;
        assert!(input.validate().is_err());
        input.mood = 6;
        assert!(input.validate().is_err());
        input.mood = 3;

        input.sleep = -1.0;
        assert!(input.validate().is_err());
        input.sleep = f64::NAN;
        assert!(input.validate().is_err());
        input.sleep = 8.0;

        input.posture_score = 101;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_gender_serialization() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let parsed: Gender = serde_json::from_str("\"male\"").unwrap();
        assert_eq!(parsed, Gender::Male);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::Fair).unwrap();
        assert_eq!(json, "\"fair\"");
        assert_eq!(HealthStatus::Fair.label(), "Fair Health - Needs Improvement");
    }

    #[test]
    fn test_recommendation_formatted() {
        let rec = Recommendation::new(
            AdviceCategory::Hydration,
            "💧",
            "Hydration Alert",
            "Drink more water.",
        );
        assert_eq!(
            rec.formatted(),
            "💧 <strong>Hydration Alert:</strong> Drink more water."
        );
    }
}
