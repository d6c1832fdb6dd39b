//! Quiz configuration.

use crate::error::{Result, SettingsError};
use crate::priority::PriorityScorer;
use crate::types::QuizMode;
use serde::{Deserialize, Serialize};

/// Settings used to assemble a quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub question_count: usize,
    pub mode: QuizMode,
    /// Upper bound on choices per question (correct answer included).
    pub max_choices: usize,
    pub noise_amplitude: f64,
    pub never_reviewed_days: f64,
}

impl Default for QuizSettings {
    fn default() -> Self {
        let scorer = PriorityScorer::default();
        Self {
            question_count: 10,
            mode: QuizMode::default(),
            max_choices: 4,
            noise_amplitude: scorer.noise_amplitude,
            never_reviewed_days: scorer.never_reviewed_days,
        }
    }
}

/// Per-quiz overrides (all fields optional).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<QuizMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_choices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_amplitude: Option<f64>,
}

impl QuizSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_choices == 0 {
            return Err(SettingsError::InvalidMaxChoices);
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(SettingsError::InvalidNoiseAmplitude(self.noise_amplitude));
        }
        if !self.never_reviewed_days.is_finite() || self.never_reviewed_days < 0.0 {
            return Err(SettingsError::InvalidNeverReviewedDays(
                self.never_reviewed_days,
            ));
        }
        Ok(())
    }

    /// Merge with optional overrides and validate the outcome.
    pub fn merge(&self, overrides: Option<&QuizOverrides>) -> Result<Self> {
        let merged = match overrides {
            Some(o) => Self {
                question_count: o.question_count.unwrap_or(self.question_count),
                mode: o.mode.unwrap_or(self.mode),
                max_choices: o.max_choices.unwrap_or(self.max_choices),
                noise_amplitude: o.noise_amplitude.unwrap_or(self.noise_amplitude),
                never_reviewed_days: self.never_reviewed_days,
            },
            None => self.clone(),
        };
        merged.validate()?;
        Ok(merged)
    }

    /// Scorer configured from these settings.
    pub fn scorer(&self) -> PriorityScorer {
        PriorityScorer {
            noise_amplitude: self.noise_amplitude,
            never_reviewed_days: self.never_reviewed_days,
        }
    }
}
