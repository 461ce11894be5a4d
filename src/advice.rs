//! Recommendation selection
//!
//! This module assembles the prioritized advice list for one check-in.
//! Rules are evaluated in a fixed order and each appends at most one entry,
//! so the output order is the priority order and duplicates cannot occur.

use crate::types::{AdviceCategory, DailyInput, HealthMetrics, ObesityLevel, Recommendation, RiskLevel};

/// Select recommendations for a check-in against its computed metrics.
///
/// The BMI tier rule always fires exactly once; the two activity rules are
/// mutually exclusive; the remaining rules fire independently.
pub fn select_recommendations(input: &DailyInput, metrics: &HealthMetrics) -> Vec<Recommendation> {
    let mut suggestions = Vec::new();

    match metrics.risk_labels.obesity {
        ObesityLevel::Moderate | ObesityLevel::High | ObesityLevel::VeryHigh => {
            suggestions.push(Recommendation::new(
                AdviceCategory::Weight,
                "🍎",
                "Weight Management",
                "Your BMI indicates overweight. Consider a balanced diet with a calorie deficit of 300-500 kcal/day combined with regular exercise.",
            ));
        }
        ObesityLevel::Underweight => {
            suggestions.push(Recommendation::new(
                AdviceCategory::Weight,
                "🍽️",
                "Healthy Weight Gain",
                "Your BMI suggests underweight. Add 300-500 calories daily through nutrient-dense foods like nuts, avocados, and whole grains.",
            ));
        }
        ObesityLevel::Low => {
            suggestions.push(Recommendation::new(
                AdviceCategory::Weight,
                "✅",
                "Maintain Healthy Weight",
                "Your BMI is in the healthy range. Continue your balanced diet and regular physical activity.",
            ));
        }
    }

    if input.activity < 30.0 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Activity,
            "🏃",
            "Increase Physical Activity",
            "Start with 15 minutes of brisk walking daily and gradually increase to 30 minutes. This helps improve cardiovascular health.",
        ));
    } else if input.activity < 60.0 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Activity,
            "💪",
            "Boost Your Activity",
            "You're doing well! Try to reach 45-60 minutes of exercise for optimal health benefits.",
        ));
    }

    if input.water < 8 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Hydration,
            "💧",
            "Hydration Alert",
            "Set hourly reminders to drink water. Aim for at least 8 glasses (2 liters) daily to support metabolism and overall health.",
        ));
    }

    if input.screen_time > 6.0 {
        suggestions.push(Recommendation::new(
            AdviceCategory::ScreenTime,
            "📱",
            "Reduce Screen Time",
            "High screen time affects sleep and posture. Follow the 20-20-20 rule: every 20 minutes, look 20 feet away for 20 seconds.",
        ));
    }

    if input.sleep < 7.0 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Sleep,
            "😴",
            "Improve Sleep",
            "Aim for 7-9 hours of quality sleep. Create a bedtime routine and avoid screens 1 hour before sleep.",
        ));
    }

    if input.mood >= 4 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Stress,
            "🧘",
            "Stress Management",
            "Practice daily meditation, deep breathing, or yoga for 10-15 minutes to reduce stress levels.",
        ));
    }

    if input.posture_score < 70 {
        suggestions.push(Recommendation::new(
            AdviceCategory::Posture,
            "🪑",
            "Posture Improvement",
            "Adjust your workspace ergonomically. Do shoulder rolls and neck stretches every hour when sitting.",
        ));
    }

    if metrics.risk_labels.cardiovascular == RiskLevel::High
        || metrics.risk_labels.hypertension == RiskLevel::High
    {
        suggestions.push(Recommendation::new(
            AdviceCategory::HeartHealth,
            "❤️",
            "Heart Health Priority",
            "Include cardio exercises 3-4 times per week and consider consulting a healthcare provider for blood pressure monitoring.",
        ));
    }

    suggestions
}
