//! Core types for the quiz engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A vocabulary item as supplied by the surrounding application's store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: i64,
    /// Target-language word or phrase.
    pub term: String,
    /// Native-language gloss.
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_count: u32,
}

impl VocabularyEntry {
    /// Create a never-reviewed entry.
    pub fn new(id: i64, term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            id,
            term: term.into(),
            meaning: meaning.into(),
            example: None,
            last_reviewed_at: None,
            review_count: 0,
        }
    }

    /// Set the review history.
    pub fn reviewed(mut self, at: DateTime<Utc>, count: u32) -> Self {
        self.last_reviewed_at = Some(at);
        self.review_count = count;
        self
    }

    /// Attach an example sentence.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Question direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Show the term, choose the meaning.
    TermToMeaning,
    /// Show the meaning, choose the term.
    MeaningToTerm,
}

impl Default for QuizMode {
    fn default() -> Self {
        Self::TermToMeaning
    }
}

impl QuizMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TermToMeaning => "term_to_meaning",
            Self::MeaningToTerm => "meaning_to_term",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "term_to_meaning" => Some(Self::TermToMeaning),
            "meaning_to_term" => Some(Self::MeaningToTerm),
            _ => None,
        }
    }

    /// The field the learner has to pick.
    pub fn answer_of<'a>(&self, entry: &'a VocabularyEntry) -> &'a str {
        match self {
            Self::TermToMeaning => &entry.meaning,
            Self::MeaningToTerm => &entry.term,
        }
    }

    /// The field shown to the learner.
    pub fn prompt_of<'a>(&self, entry: &'a VocabularyEntry) -> &'a str {
        match self {
            Self::TermToMeaning => &entry.term,
            Self::MeaningToTerm => &entry.meaning,
        }
    }
}

/// A multiple-choice question built from one vocabulary entry.
///
/// `correct_index` always addresses a slot in `choices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub vocabulary_entry: VocabularyEntry,
    pub mode: QuizMode,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl QuizQuestion {
    /// Text shown to the learner.
    pub fn prompt(&self) -> &str {
        self.mode.prompt_of(&self.vocabulary_entry)
    }

    /// Text of the expected answer.
    pub fn correct_answer(&self) -> &str {
        self.mode.answer_of(&self.vocabulary_entry)
    }

    /// Text at `index`.
    ///
    /// # Panics
    /// Panics if `index` is outside `choices`.
    pub fn choice(&self, index: usize) -> &str {
        assert!(
            index < self.choices.len(),
            "choice index {} out of range for {} choices",
            index,
            self.choices.len()
        );
        &self.choices[index]
    }

    /// Whether picking `selected_index` answers this question correctly.
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }
}

/// One recorded answer. Correctness is derived from the referenced question,
/// see [`QuizSession::is_correct`](crate::session::QuizSession::is_correct).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub question_index: usize,
    pub selected_index: usize,
    pub answered_at: DateTime<Utc>,
}

/// Session phases as seen by the presentation layer.
///
/// The library does not drive these; it only declares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Ready,
    Playing,
    Feedback,
    Finished,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Ready
    }
}

/// An incorrectly answered question and the text the learner picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub question: QuizQuestion,
    pub selected_answer: String,
}

/// Summary of a finished (or abandoned) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub session_id: Uuid,
    pub total_questions: usize,
    pub correct_count: usize,
    pub incorrect_count: usize,
    /// Integer percent, 0-100.
    pub accuracy: u32,
    /// Whole seconds.
    pub duration_secs: i64,
    pub mistakes: Vec<Mistake>,
    pub completed_at: DateTime<Utc>,
}
