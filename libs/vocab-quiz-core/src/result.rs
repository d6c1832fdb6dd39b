//! Session summaries.

use crate::session::QuizSession;
use crate::types::{Mistake, QuizResult};
use chrono::{DateTime, Utc};

/// Reduce a session to its result.
///
/// Duration runs from the session start to the last answer. A session with no
/// answers is still running, so its duration is measured up to `now`.
///
/// # Panics
/// Panics if an answer refers to a question or choice that does not exist.
pub fn summarize(session: QuizSession, now: DateTime<Utc>) -> QuizResult {
    let answers = session.answers();

    let mut correct_count = 0;
    let mut mistakes = Vec::new();
    for answer in answers {
        let question = session.question(answer.question_index);
        if question.is_correct(answer.selected_index) {
            correct_count += 1;
        } else {
            mistakes.push(Mistake {
                selected_answer: question.choice(answer.selected_index).to_string(),
                question: question.clone(),
            });
        }
    }
    let incorrect_count = answers.len() - correct_count;

    let accuracy = if answers.is_empty() {
        0
    } else {
        round_half_up(correct_count as f64 / answers.len() as f64 * 100.0) as u32
    };

    let end = answers.last().map_or(now, |a| a.answered_at);
    let elapsed_ms = (end - session.started_at()).num_milliseconds();
    let duration_secs = round_half_up(elapsed_ms as f64 / 1000.0);

    tracing::debug!(
        session_id = %session.id(),
        answered = answers.len(),
        correct = correct_count,
        accuracy,
        duration_secs,
        "summarized quiz session"
    );

    QuizResult {
        session_id: session.id(),
        total_questions: session.questions().len(),
        correct_count,
        incorrect_count,
        accuracy,
        duration_secs,
        mistakes,
        completed_at: now,
    }
}

/// Round to the nearest integer, halves towards positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
