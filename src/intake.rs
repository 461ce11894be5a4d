//! Raw form intake
//!
//! This module converts raw user-entered form values into typed engine
//! records. UI widgets deliver strings; every numeric field is parsed
//! explicitly with a fallback to its documented default, so implicit
//! coercion never reaches the engine and its domain stays strictly numeric.
//!
//! Daily values are additionally clamped to the entry-widget ranges
//! (sleep 0-12 h, activity 0-120 min, water 0-16 glasses, screen time
//! 0-16 h, mood 1-5, posture 0-100).

use crate::types::{DailyInput, Gender, Profile, DEFAULT_POSTURE_SCORE};
use serde::{Deserialize, Serialize};

/// Raw signup form as the presentation layer submits it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub waist: String,
    pub hip: String,
}

impl ProfileForm {
    /// Resolve the form into a profile, falling back to the default profile
    /// value for any field that is blank, unparseable, or non-positive.
    pub fn into_profile(self) -> Profile {
        let defaults = Profile::default();
        Profile {
            name: non_blank_or(&self.name, &defaults.name),
            age: parse_positive(&self.age).map(|v| v as u32).unwrap_or(defaults.age),
            gender: parse_gender(&self.gender),
            weight: parse_positive(&self.weight).unwrap_or(defaults.weight),
            height: parse_positive(&self.height).unwrap_or(defaults.height),
            waist: parse_positive(&self.waist).unwrap_or(defaults.waist),
            hip: parse_positive(&self.hip).unwrap_or(defaults.hip),
        }
    }
}

/// Raw daily check-in form as the entry widgets submit it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyForm {
    pub mood: String,
    pub sleep: String,
    pub activity: String,
    pub water: String,
    pub screen_time: String,
    pub posture_score: String,
}

impl DailyForm {
    /// Resolve the form into a daily input, falling back to the default
    /// value for any field that fails to parse and clamping the rest to the
    /// entry-widget ranges.
    pub fn into_daily_input(self) -> DailyInput {
        let defaults = DailyInput::default();
        DailyInput {
            mood: parse_finite(&self.mood)
                .map(|v| v.round().clamp(1.0, 5.0) as u8)
                .unwrap_or(defaults.mood),
            sleep: parse_finite(&self.sleep)
                .map(|v| v.clamp(0.0, 12.0))
                .unwrap_or(defaults.sleep),
            activity: parse_finite(&self.activity)
                .map(|v| v.clamp(0.0, 120.0))
                .unwrap_or(defaults.activity),
            water: parse_finite(&self.water)
                .map(|v| v.round().clamp(0.0, 16.0) as u32)
                .unwrap_or(defaults.water),
            screen_time: parse_finite(&self.screen_time)
                .map(|v| v.clamp(0.0, 16.0))
                .unwrap_or(defaults.screen_time),
            posture_score: parse_finite(&self.posture_score)
                .map(|v| v.round().clamp(0.0, 100.0) as u8)
                .unwrap_or(DEFAULT_POSTURE_SCORE),
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a finite float, rejecting NaN and infinities
fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a strictly positive float. Zero falls back like blank input does,
/// matching the signup form's behavior for empty measurements.
fn parse_positive(value: &str) -> Option<f64> {
    parse_finite(value).filter(|v| *v > 0.0)
}

fn parse_gender(value: &str) -> Gender {
    match value.trim().to_ascii_lowercase().as_str() {
        "male" => Gender::Male,
        "female" => Gender::Female,
        "" => Gender::default(),
        _ => Gender::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_profile_form_yields_default_profile() {
        let profile = ProfileForm::default().into_profile();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_profile_form_parses_measurements() {
        let form = ProfileForm {
            name: "  Ada  ".to_string(),
            age: "34".to_string(),
            gender: "male".to_string(),
            weight: "72.5".to_string(),
            height: "180".to_string(),
            waist: "82".to_string(),
            hip: "98".to_string(),
        };
        let profile = form.into_profile();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.age, 34);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.weight, 72.5);
        assert_eq!(profile.height, 180.0);
    }

    #[test]
    fn test_zero_and_garbage_measurements_fall_back() {
        let form = ProfileForm {
            weight: "0".to_string(),
            height: "tall".to_string(),
            age: "-3".to_string(),
            ..ProfileForm::default()
        };
        let profile = form.into_profile();
        assert_eq!(profile.weight, 60.0);
        assert_eq!(profile.height, 165.0);
        assert_eq!(profile.age, 25);
    }

    #[test]
    fn test_unknown_gender_maps_to_other() {
        assert_eq!(parse_gender("nonbinary"), Gender::Other);
        assert_eq!(parse_gender("FEMALE"), Gender::Female);
        assert_eq!(parse_gender(""), Gender::Female);
    }

    #[test]
    fn test_blank_daily_form_yields_default_input() {
        let input = DailyForm::default().into_daily_input();
        assert_eq!(input, DailyInput::default());
        assert_eq!(input.posture_score, DEFAULT_POSTURE_SCORE);
    }

    #[test]
    fn test_daily_form_clamps_to_widget_ranges() {
        let form = DailyForm {
            mood: "9".to_string(),
            sleep: "20".to_string(),
            activity: "500".to_string(),
            water: "40".to_string(),
            screen_time: "-2".to_string(),
            posture_score: "250".to_string(),
        };
        let input = form.into_daily_input();
        assert_eq!(input.mood, 5);
        assert_eq!(input.sleep, 12.0);
        assert_eq!(input.activity, 120.0);
        assert_eq!(input.water, 16);
        assert_eq!(input.screen_time, 0.0);
        assert_eq!(input.posture_score, 100);
    }

    #[test]
    fn test_daily_form_parses_fractional_hours() {
        let form = DailyForm {
            sleep: "7.5".to_string(),
            screen_time: "3.5".to_string(),
            ..DailyForm::default()
        };
        let input = form.into_daily_input();
        assert_eq!(input.sleep, 7.5);
        assert_eq!(input.screen_time, 3.5);
    }

    #[test]
    fn test_non_finite_strings_fall_back() {
        let form = DailyForm {
            sleep: "NaN".to_string(),
            activity: "inf".to_string(),
            ..DailyForm::default()
        };
        let input = form.into_daily_input();
        assert_eq!(input.sleep, 0.0);
        assert_eq!(input.activity, 0.0);
    }

    #[test]
    fn test_clamped_input_always_validates() {
        let forms = [
            DailyForm::default(),
            DailyForm {
                mood: "-5".to_string(),
                sleep: "100".to_string(),
                water: "1e9".to_string(),
                ..DailyForm::default()
            },
        ];
        for form in forms {
            assert!(form.into_daily_input().validate().is_ok());
        }
    }
}
