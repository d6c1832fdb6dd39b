//! Error types for vocab-quiz-core.

use thiserror::Error;

/// Result type alias using SettingsError.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while loading or validating quiz settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("max_choices must be at least 1")]
    InvalidMaxChoices,

    #[error("noise_amplitude must be finite and non-negative, got {0}")]
    InvalidNoiseAmplitude(f64),

    #[error("never_reviewed_days must be finite and non-negative, got {0}")]
    InvalidNeverReviewedDays(f64),

    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
