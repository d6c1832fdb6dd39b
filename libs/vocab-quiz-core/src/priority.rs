//! Review priority scoring.
//!
//! Larger scores mean an entry needs review more urgently:
//! - Days since last review, with never-reviewed entries treated as very overdue
//! - Divided by (review count + 1), so well-practised entries sink
//! - Plus a small uniform noise term so similar histories do not always sort the same way

use crate::types::VocabularyEntry;
use chrono::{DateTime, Utc};
use rand::Rng;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Priority scorer with configurable parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityScorer {
    /// Noise is drawn from `[0, noise_amplitude)`. Zero, negative or
    /// non-finite values disable it.
    pub noise_amplitude: f64,
    /// Days assumed for an entry that was never reviewed.
    pub never_reviewed_days: f64,
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self {
            noise_amplitude: 0.2,
            never_reviewed_days: 999.0,
        }
    }
}

impl PriorityScorer {
    /// Scorer without noise.
    pub fn deterministic() -> Self {
        Self {
            noise_amplitude: 0.0,
            ..Default::default()
        }
    }

    /// Score one entry at `now`.
    pub fn score<R: Rng + ?Sized>(
        &self,
        entry: &VocabularyEntry,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> f64 {
        let days_since_review = match entry.last_reviewed_at {
            Some(at) => days_between(at, now),
            None => self.never_reviewed_days,
        };
        let review_factor = 1.0 / (f64::from(entry.review_count) + 1.0);

        days_since_review * review_factor + self.noise(rng)
    }

    fn noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.noise_amplitude.is_finite() && self.noise_amplitude > 0.0 {
            rng.gen_range(0.0..self.noise_amplitude)
        } else {
            0.0
        }
    }
}

/// Fractional days from `from` to `to` (negative if `from` is later).
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn never_reviewed_uses_sentinel() {
        let scorer = PriorityScorer::deterministic();
        let entry = VocabularyEntry::new(1, "Baum", "tree");
        let score = scorer.score(&entry, now(), &mut seeded_rng(0));
        assert_eq!(score, 999.0);
    }

    #[test]
    fn review_count_divides_elapsed_days() {
        let scorer = PriorityScorer::deterministic();
        let entry = VocabularyEntry::new(1, "Baum", "tree").reviewed(now() - Duration::days(10), 4);
        let score = scorer.score(&entry, now(), &mut seeded_rng(0));
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_days_are_kept() {
        let scorer = PriorityScorer::deterministic();
        let entry = VocabularyEntry::new(1, "Baum", "tree").reviewed(now() - Duration::hours(12), 0);
        let score = scorer.score(&entry, now(), &mut seeded_rng(0));
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn future_review_scores_negative() {
        let scorer = PriorityScorer::deterministic();
        let entry = VocabularyEntry::new(1, "Baum", "tree").reviewed(now() + Duration::days(2), 1);
        let score = scorer.score(&entry, now(), &mut seeded_rng(0));
        assert!(score < 0.0);
    }

    #[test]
    fn never_reviewed_outranks_reviewed_today() {
        let scorer = PriorityScorer::deterministic();
        let fresh = VocabularyEntry::new(1, "neu", "new");
        let practised =
            VocabularyEntry::new(2, "alt", "old").reviewed(now() - Duration::hours(3), 5);
        let mut rng = seeded_rng(0);
        assert!(scorer.score(&fresh, now(), &mut rng) >= scorer.score(&practised, now(), &mut rng));
    }

    #[test]
    fn noise_stays_within_amplitude() {
        let scorer = PriorityScorer::default();
        let entry = VocabularyEntry::new(1, "Baum", "tree").reviewed(now(), 0);
        let mut rng = seeded_rng(7);
        for _ in 0..1000 {
            let score = scorer.score(&entry, now(), &mut rng);
            assert!((0.0..0.2).contains(&score), "score {} outside noise range", score);
        }
    }

    #[test]
    fn non_finite_noise_is_ignored() {
        let entry = VocabularyEntry::new(1, "Baum", "tree");
        let mut rng = seeded_rng(3);
        for amplitude in [f64::INFINITY, f64::NAN, -1.0] {
            let scorer = PriorityScorer {
                noise_amplitude: amplitude,
                ..Default::default()
            };
            assert_eq!(scorer.score(&entry, now(), &mut rng), 999.0);
        }
    }

    #[test]
    fn noise_varies_between_draws() {
        let scorer = PriorityScorer::default();
        let entry = VocabularyEntry::new(1, "Baum", "tree");
        let mut rng = seeded_rng(7);
        let a = scorer.score(&entry, now(), &mut rng);
        let b = scorer.score(&entry, now(), &mut rng);
        assert_ne!(a, b);
    }
}
