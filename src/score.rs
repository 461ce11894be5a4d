//! Composite score derivation
//!
//! This module derives the 0-100 composite wellness score from a daily
//! check-in. Each factor is scored by a descending-threshold, first-match
//! band table; the six contributions are summed and clamped.

use crate::types::{DailyInput, ScoreBreakdown};

/// Score calculator for deriving per-factor points and the composite total
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Derive per-factor contributions from a daily check-in
    pub fn breakdown(input: &DailyInput) -> ScoreBreakdown {
        ScoreBreakdown {
            sleep: sleep_points(input.sleep),
            water: water_points(input.water),
            activity: activity_points(input.activity),
            screen_time: screen_time_points(input.screen_time),
            mood: mood_points(input.mood),
            posture: posture_points(input.posture_score),
        }
    }

    /// Composite score: sum of factor contributions, clamped into [0, 100]
    pub fn compute(input: &DailyInput) -> u8 {
        Self::breakdown(input).total()
    }
}

/// Sleep contribution (max 25). The 7-9h optimum band is checked before the
/// wider 6-10h band, so band edges are inclusive of the lower bound.
fn sleep_points(hours: f64) -> u8 {
    if (7.0..=9.0).contains(&hours) {
        25
    } else if (6.0..=10.0).contains(&hours) {
        20
    } else if hours >= 4.0 {
        10
    } else {
        0
    }
}

/// Water contribution (max 15)
fn water_points(glasses: u32) -> u8 {
    if glasses >= 8 {
        15
    } else if glasses >= 6 {
        12
    } else if glasses >= 4 {
        6
    } else if glasses >= 2 {
        3
    } else {
        0
    }
}

/// Activity contribution (max 20)
fn activity_points(minutes: f64) -> u8 {
    if minutes >= 60.0 {
        20
    } else if minutes >= 45.0 {
        17
    } else if minutes >= 30.0 {
        15
    } else if minutes >= 15.0 {
        8
    } else if minutes >= 5.0 {
        4
    } else {
        0
    }
}

/// Screen time contribution (max 10, inverse: less screen time scores more)
fn screen_time_points(hours: f64) -> u8 {
    if hours <= 2.0 {
        10
    } else if hours <= 4.0 {
        8
    } else if hours <= 6.0 {
        5
    } else if hours <= 10.0 {
        2
    } else {
        0
    }
}

/// Mood contribution (max 15, inverse: 1 = best mood)
fn mood_points(mood: u8) -> u8 {
    match mood {
        1 => 15,
        2 => 12,
        3 => 9,
        4 => 5,
        _ => 2,
    }
}

/// Posture contribution (max 15)
fn posture_points(score: u8) -> u8 {
    if score >= 85 {
        15
    } else if score >= 70 {
        12
    } else if score >= 60 {
        8
    } else if score >= 50 {
        5
    } else {
        2
    }
}
