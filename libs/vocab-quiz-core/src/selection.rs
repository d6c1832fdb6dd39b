//! Picks the entries most in need of review.

use crate::priority::PriorityScorer;
use crate::types::VocabularyEntry;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Rank `vocabulary` by priority at `now` and return the top `count` entries.
///
/// Returns `min(count, vocabulary.len())` entries, highest priority first.
/// An empty vocabulary or a zero count yields an empty selection.
pub fn select_questions<R: Rng + ?Sized>(
    vocabulary: &[VocabularyEntry],
    count: usize,
    scorer: &PriorityScorer,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<VocabularyEntry> {
    if vocabulary.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &VocabularyEntry)> = vocabulary
        .iter()
        .map(|entry| (scorer.score(entry, now, rng), entry))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let selected: Vec<VocabularyEntry> = scored
        .into_iter()
        .take(count)
        .map(|(_, entry)| entry.clone())
        .collect();

    tracing::debug!(
        available = vocabulary.len(),
        requested = count,
        selected = selected.len(),
        "selected quiz entries"
    );
    selected
}
