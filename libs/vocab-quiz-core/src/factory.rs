//! Turns selected vocabulary into quiz questions.

use crate::choices::generate_choices;
use crate::selection::select_questions;
use crate::session::QuizSession;
use crate::settings::QuizSettings;
use crate::types::{QuizMode, QuizQuestion, VocabularyEntry};
use chrono::{DateTime, Utc};
use rand::Rng;

/// One question per entry of `selected`, in the same order.
///
/// Distractors are drawn from the whole of `vocabulary`.
pub fn build_questions<R: Rng + ?Sized>(
    selected: &[VocabularyEntry],
    vocabulary: &[VocabularyEntry],
    mode: QuizMode,
    max_choices: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    selected
        .iter()
        .map(|entry| {
            let set = generate_choices(entry, vocabulary, mode, max_choices, rng);
            QuizQuestion {
                vocabulary_entry: entry.clone(),
                mode,
                choices: set.choices,
                correct_index: set.correct_index,
            }
        })
        .collect()
}

/// Select, build and open a session in one step.
pub fn start_quiz<R: Rng + ?Sized>(
    vocabulary: &[VocabularyEntry],
    settings: &QuizSettings,
    now: DateTime<Utc>,
    rng: &mut R,
) -> QuizSession {
    let selected = select_questions(
        vocabulary,
        settings.question_count,
        &settings.scorer(),
        now,
        rng,
    );
    let questions = build_questions(
        &selected,
        vocabulary,
        settings.mode,
        settings.max_choices,
        rng,
    );

    let session = QuizSession::new(questions, now, rng);
    tracing::debug!(
        session_id = %session.id(),
        mode = settings.mode.as_str(),
        questions = session.questions().len(),
        "started quiz session"
    );
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn vocab() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new(1, "rot", "red"),
            VocabularyEntry::new(2, "blau", "blue"),
            VocabularyEntry::new(3, "gelb", "yellow"),
            VocabularyEntry::new(4, "grün", "green"),
            VocabularyEntry::new(5, "schwarz", "black"),
        ]
    }

    #[test]
    fn preserves_selection_order() {
        let all = vocab();
        let selected = vec![all[3].clone(), all[0].clone(), all[4].clone()];
        let questions = build_questions(&selected, &all, QuizMode::TermToMeaning, 4, &mut seeded_rng(1));
        let ids: Vec<i64> = questions.iter().map(|q| q.vocabulary_entry.id).collect();
        assert_eq!(ids, vec![4, 1, 5]);
    }

    #[test]
    fn questions_follow_mode() {
        let all = vocab();
        let questions = build_questions(&all[..1], &all, QuizMode::MeaningToTerm, 4, &mut seeded_rng(1));
        let q = &questions[0];
        assert_eq!(q.mode, QuizMode::MeaningToTerm);
        assert_eq!(q.prompt(), "red");
        assert_eq!(q.choices[q.correct_index], "rot");
        assert_eq!(q.choices.len(), 4);
    }

    #[test]
    fn empty_selection_builds_nothing() {
        let questions = build_questions(&[], &vocab(), QuizMode::TermToMeaning, 4, &mut seeded_rng(1));
        assert!(questions.is_empty());
    }

    #[test]
    fn start_quiz_respects_settings() {
        let settings = QuizSettings {
            question_count: 3,
            max_choices: 3,
            ..Default::default()
        };
        let session = start_quiz(&vocab(), &settings, now(), &mut seeded_rng(8));
        assert_eq!(session.questions().len(), 3);
        assert_eq!(session.started_at(), now());
        assert!(session.questions().iter().all(|q| q.choices.len() == 3));
    }

    #[test]
    fn start_quiz_is_reproducible() {
        let settings = QuizSettings::default();
        let a = start_quiz(&vocab(), &settings, now(), &mut seeded_rng(77));
        let b = start_quiz(&vocab(), &settings, now(), &mut seeded_rng(77));
        assert_eq!(a, b);
    }
}
