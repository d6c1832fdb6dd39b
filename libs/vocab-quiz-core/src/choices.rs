//! Multiple-choice construction.

use crate::types::{QuizMode, VocabularyEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shuffled answer texts and the position of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub choices: Vec<String>,
    pub correct_index: usize,
}

/// Build the choices for `entry`, drawing distractors from `vocabulary`.
///
/// Up to `max_choices - 1` distinct other entries (by id) are sampled without
/// replacement. With fewer candidates the set simply gets smaller, down to a
/// single choice. Distractors are not deduplicated by text: if one reads the
/// same as the correct answer, `correct_index` points at the first match.
pub fn generate_choices<R: Rng + ?Sized>(
    entry: &VocabularyEntry,
    vocabulary: &[VocabularyEntry],
    mode: QuizMode,
    max_choices: usize,
    rng: &mut R,
) -> ChoiceSet {
    let correct_answer = mode.answer_of(entry);

    let pool: Vec<&VocabularyEntry> = vocabulary.iter().filter(|e| e.id != entry.id).collect();
    let wanted = max_choices.max(1) - 1;

    let mut choices = Vec::with_capacity(wanted + 1);
    choices.push(correct_answer.to_string());
    choices.extend(
        pool.choose_multiple(rng, wanted)
            .map(|e| mode.answer_of(e).to_string()),
    );
    shuffle(&mut choices, rng);

    let correct_index = choices
        .iter()
        .position(|c| c == correct_answer)
        .expect("correct answer is among the choices");

    tracing::trace!(
        entry_id = entry.id,
        choices = choices.len(),
        correct_index,
        "generated choices"
    );
    ChoiceSet {
        choices,
        correct_index,
    }
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
