use std::sync::Arc;

use crate::core::similarity::{similarity_or_zero, StopWordSet, StopWords};
use crate::models::InterestLabel;

/// Minimum similarity an interest label must exceed to match a request title
pub const DEFAULT_INTEREST_THRESHOLD: f64 = 0.49;

/// Infers the interest category a request title implies
#[derive(Clone)]
pub struct InterestInferencer {
    threshold: f64,
    stop_words: Arc<dyn StopWords>,
}

impl std::fmt::Debug for InterestInferencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterestInferencer")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl InterestInferencer {
    pub fn new(threshold: f64, stop_words: Arc<dyn StopWords>) -> Self {
        Self {
            threshold,
            stop_words,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn stop_words(&self) -> &dyn StopWords {
        self.stop_words.as_ref()
    }

    /// Best-matching interest label for a request title
    ///
    /// A label is accepted only if its similarity is strictly greater than the
    /// threshold and than every earlier label's, so on an exact tie the first
    /// label in catalog order wins. Returns `None` when nothing clears the
    /// threshold.
    pub fn infer<'a>(
        &self,
        request_title: &str,
        interests: &'a [InterestLabel],
    ) -> Option<&'a InterestLabel> {
        let mut best_score = self.threshold;
        let mut best = None;

        for interest in interests {
            let score = similarity_or_zero(interest, request_title, self.stop_words.as_ref());
            tracing::trace!("Interest '{}' vs title '{}': {:.4}", interest, request_title, score);
            if score > best_score {
                best_score = score;
                best = Some(interest);
            }
        }

        best
    }
}

impl Default for InterestInferencer {
    fn default() -> Self {
        Self::new(DEFAULT_INTEREST_THRESHOLD, Arc::new(StopWordSet::english()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(labels: &[&str]) -> Vec<InterestLabel> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_infers_exact_label() {
        let inferencer = InterestInferencer::default();
        let interests = catalog(&["gardening", "meal delivery", "tutoring"]);

        let inferred = inferencer.infer("Meal Delivery", &interests);

        assert_eq!(inferred.map(String::as_str), Some("meal delivery"));
    }

    #[test]
    fn test_prefers_higher_similarity() {
        let inferencer = InterestInferencer::default();
        // "meal" scores 1/sqrt(2) against the title, "meal delivery" scores 1.0
        let interests = catalog(&["meal", "meal delivery"]);

        let inferred = inferencer.infer("meal delivery", &interests);

        assert_eq!(inferred.map(String::as_str), Some("meal delivery"));
    }

    #[test]
    fn test_weak_overlap_rejected() {
        let inferencer = InterestInferencer::default();
        // one shared word across 4 x 3 keywords: 1 / sqrt(12) ~ 0.29
        let interests = catalog(&["garden care work"]);

        assert_eq!(inferencer.infer("elderly care home visits", &interests), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        let interests = catalog(&["meal delivery"]);
        let inferencer = InterestInferencer::new(1.0, Arc::new(StopWordSet::english()));

        assert_eq!(inferencer.infer("meal delivery", &interests), None);
    }

    #[test]
    fn test_tie_keeps_first_label() {
        let inferencer = InterestInferencer::default();
        let interests = catalog(&["delivery meal", "meal delivery"]);

        let inferred = inferencer.infer("meal delivery", &interests);

        assert_eq!(inferred.map(String::as_str), Some("delivery meal"));
    }

    #[test]
    fn test_degenerate_title_is_no_match() {
        let inferencer = InterestInferencer::default();
        let interests = catalog(&["meal delivery"]);

        assert_eq!(inferencer.infer("the", &interests), None);
        assert_eq!(inferencer.infer("meal delivery", &[]), None);
    }
}
