//! Core quiz engine for vocabulary review.
//!
//! Provides:
//! - Review priority scoring and question selection (spaced-repetition style)
//! - Multiple-choice construction with random distractors
//! - Session bookkeeping and result aggregation
//! - Shared types (VocabularyEntry, QuizQuestion, QuizResult, etc.)
//!
//! All randomness is passed in by the caller; see [`random`] for seedable generators.

pub mod choices;
pub mod error;
pub mod factory;
pub mod priority;
pub mod random;
pub mod result;
pub mod selection;
pub mod session;
pub mod settings;
pub mod types;

pub use choices::{generate_choices, shuffle, ChoiceSet};
pub use error::{Result, SettingsError};
pub use factory::{build_questions, start_quiz};
pub use priority::PriorityScorer;
pub use random::{entropy_rng, seeded_rng, QuizRng};
pub use result::summarize;
pub use selection::select_questions;
pub use session::QuizSession;
pub use settings::{QuizOverrides, QuizSettings};
pub use types::{
    Mistake, QuizAnswer, QuizMode, QuizQuestion, QuizResult, SessionStatus, VocabularyEntry,
};
