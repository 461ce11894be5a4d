//! Engine orchestration
//!
//! This module provides the public boundary API for Wellscore. A check-in
//! evaluation runs the full sequence: parse → validate → compute metrics →
//! select recommendations → encode report.

use crate::advice::select_recommendations;
use crate::error::EngineError;
use crate::metrics::compute_metrics;
use crate::report::{CheckInReport, ReportEncoder};
use crate::types::{DailyInput, Profile};

/// Evaluate one check-in from JSON records and return the report as JSON.
///
/// # Arguments
/// * `profile_json` - The static profile record (see [`Profile`])
/// * `input_json` - The daily check-in record (see [`DailyInput`])
///
/// # Errors
/// Fails when either record is malformed JSON or carries out-of-domain
/// fields (`InvalidInput`).
///
/// # Example
/// ```ignore
/// let report_json = evaluate_check_in(
///     r#"{"name":"User","age":25,"gender":"female","weight":60.0,
///         "height":165.0,"waist":70.0,"hip":95.0}"#,
///     r#"{"mood":3,"sleep":8.0,"activity":60.0,"water":8,
///         "screen_time":2.0,"posture_score":85}"#,
/// )?;
/// ```
pub fn evaluate_check_in(profile_json: &str, input_json: &str) -> Result<String, EngineError> {
    let processor = CheckInProcessor::new();
    processor.evaluate_json(profile_json, input_json)
}

/// Stateful processor reusing one report encoder across evaluations.
///
/// Use this when the host keeps the engine alive across check-ins so every
/// report carries the same producer instance ID.
pub struct CheckInProcessor {
    encoder: ReportEncoder,
}

impl Default for CheckInProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckInProcessor {
    /// Create a processor with a fresh encoder instance ID
    pub fn new() -> Self {
        Self {
            encoder: ReportEncoder::new(),
        }
    }

    /// Create a processor with a specific encoder instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self {
            encoder: ReportEncoder::with_instance_id(instance_id),
        }
    }

    /// Evaluate a typed check-in into a report payload.
    ///
    /// Both records are validated first; pass pre-validated records through
    /// [`compute_metrics`] and [`select_recommendations`] directly to skip
    /// boundary validation.
    pub fn evaluate(
        &self,
        profile: &Profile,
        input: &DailyInput,
    ) -> Result<CheckInReport, EngineError> {
        profile.validate()?;
        input.validate()?;

        let metrics = compute_metrics(profile, input);
        let recommendations = select_recommendations(input, &metrics);
        Ok(self.encoder.encode(&metrics, &recommendations))
    }

    /// Evaluate JSON records into a report JSON string
    pub fn evaluate_json(
        &self,
        profile_json: &str,
        input_json: &str,
    ) -> Result<String, EngineError> {
        let profile: Profile = serde_json::from_str(profile_json)
            .map_err(|e| EngineError::ParseError(format!("profile: {e}")))?;
        let input: DailyInput = serde_json::from_str(input_json)
            .map_err(|e| EngineError::ParseError(format!("daily input: {e}")))?;

        let report = self.evaluate(&profile, &input)?;
        serde_json::to_string_pretty(&report).map_err(EngineError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile_json() -> &'static str {
        r#"{
            "name": "User",
            "age": 25,
            "gender": "female",
            "weight": 60.0,
            "height": 165.0,
            "waist": 70.0,
            "hip": 95.0
        }"#
    }

    fn sample_input_json() -> &'static str {
        r#"{
            "mood": 3,
            "sleep": 8.0,
            "activity": 60.0,
            "water": 8,
            "screen_time": 2.0,
            "posture_score": 85
        }"#
    }

    #[test]
    fn test_evaluate_check_in() {
        let result = evaluate_check_in(sample_profile_json(), sample_input_json());
        assert!(result.is_ok());

        let report: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(report["score"], 94);
        assert_eq!(report["bmi"], 22.0);
        assert_eq!(report["status"]["label"], "Excellent Health");
        assert_eq!(report["risks"]["cardiovascular"]["percentage"], 10);
        assert_eq!(report["producer"]["name"], "wellscore");
        // Only the weight-maintenance rule fires for this check-in
        assert_eq!(report["recommendations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = evaluate_check_in("not valid json", sample_input_json());
        assert!(matches!(result, Err(EngineError::ParseError(_))));
    }

    #[test]
    fn test_out_of_domain_input_is_rejected() {
        let bad_input = r#"{
            "mood": 7,
            "sleep": 8.0,
            "activity": 60.0,
            "water": 8,
            "screen_time": 2.0,
            "posture_score": 85
        }"#;
        let result = evaluate_check_in(sample_profile_json(), bad_input);
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field: "mood", .. })
        ));
    }

    #[test]
    fn test_zero_height_is_rejected_at_the_boundary() {
        let bad_profile = r#"{
            "name": "User",
            "age": 25,
            "gender": "female",
            "weight": 60.0,
            "height": 0.0,
            "waist": 70.0,
            "hip": 95.0
        }"#;
        let result = evaluate_check_in(bad_profile, sample_input_json());
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field: "height", .. })
        ));
    }

    #[test]
    fn test_processor_keeps_instance_id_across_calls() {
        let processor = CheckInProcessor::with_instance_id("stable".to_string());
        let profile = Profile::default();
        let input = DailyInput::default();

        let first = processor.evaluate(&profile, &input).unwrap();
        let second = processor.evaluate(&profile, &input).unwrap();
        assert_eq!(first.producer.instance_id, "stable");
        assert_eq!(second.producer.instance_id, "stable");
        assert_eq!(first.score, second.score);
    }
}
