//! Wellscore - Deterministic personal health scoring and recommendation engine
//!
//! Wellscore turns a static profile and a daily behavioral check-in into a
//! composite wellness score, risk classifications, and prioritized advice
//! through a deterministic pipeline: intake → metrics calculation →
//! recommendation selection → report encoding.
//!
//! ## Modules
//!
//! - **Metrics Calculator**: `(Profile, DailyInput) -> HealthMetrics`:
//!   composite score, BMI, risk bands, status tier
//! - **Recommendation Selector**: `(DailyInput, HealthMetrics) -> advice list`
//!   in fixed priority order
//!
//! Both are pure, total functions: no I/O, no randomness, no shared state.

pub mod advice;
pub mod error;
pub mod intake;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod risk;
pub mod score;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use advice::select_recommendations;
pub use error::EngineError;
pub use metrics::compute_metrics;
pub use pipeline::{evaluate_check_in, CheckInProcessor};
pub use report::{CheckInReport, ReportEncoder};
pub use types::{
    DailyInput, HealthMetrics, HealthStatus, Profile, Recommendation, DEFAULT_POSTURE_SCORE,
};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "wellscore";
