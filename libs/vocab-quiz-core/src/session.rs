//! Quiz session bookkeeping.
//!
//! A session owns a fixed question list, a cursor and an append-only answer log.
//! Phase transitions (showing feedback, finishing) belong to the caller; the
//! session only records what happened.

use crate::types::{QuizAnswer, QuizQuestion};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// An in-progress quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    id: Uuid,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answers: Vec<QuizAnswer>,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a session over a finalized question list.
    ///
    /// The session id is drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        questions: Vec<QuizQuestion>,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        Self {
            id: Builder::from_random_bytes(rng.gen()).into_uuid(),
            questions,
            current_index: 0,
            answers: Vec::new(),
            started_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Question at `index`.
    ///
    /// # Panics
    /// Panics if `index` is outside the question list.
    pub fn question(&self, index: usize) -> &QuizQuestion {
        assert!(
            index < self.questions.len(),
            "question index {} out of range for {} questions",
            index,
            self.questions.len()
        );
        &self.questions[index]
    }

    /// Question under the cursor, or `None` once every question has been passed.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// Whether the cursor has moved past the last question.
    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Questions not yet reached by the cursor, the current one included.
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current_index)
    }

    /// Record an answer for the current question.
    ///
    /// The cursor is left in place so the caller can show feedback before
    /// calling [`advance`](Self::advance).
    ///
    /// # Panics
    /// Panics if the session is finished or `selected_index` is not a valid choice.
    pub fn record_answer(&mut self, selected_index: usize, answered_at: DateTime<Utc>) -> &QuizAnswer {
        let question_index = self.current_index;
        let question = self.current_question().unwrap_or_else(|| {
            panic!(
                "cannot record an answer: session {} has no current question",
                self.id
            )
        });
        assert!(
            selected_index < question.choices.len(),
            "selected index {} out of range for {} choices",
            selected_index,
            question.choices.len()
        );
        let correct = question.is_correct(selected_index);

        tracing::debug!(
            session_id = %self.id,
            question_index,
            selected_index,
            correct,
            "recorded answer"
        );

        self.answers.push(QuizAnswer {
            question_index,
            selected_index,
            answered_at,
        });
        &self.answers[self.answers.len() - 1]
    }

    /// Move to the next question. Returns whether one remains.
    pub fn advance(&mut self) -> bool {
        if self.current_index < self.questions.len() {
            self.current_index += 1;
        }
        !self.is_finished()
    }

    /// Whether `answer` picked the correct choice of the question it refers to.
    ///
    /// # Panics
    /// Panics if `answer.question_index` is outside the question list.
    pub fn is_correct(&self, answer: &QuizAnswer) -> bool {
        self.question(answer.question_index)
            .is_correct(answer.selected_index)
    }
}
