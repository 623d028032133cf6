//! Emotion classification seam.
//!
//! Two implementations behind one trait:
//! - `LexiconClassifier`: pure keyword scoring, always available.
//! - `HybridClassifier`: the hosted model first, lexicon on any failure.
//!
//! `AppState` holds an `Arc<dyn EmotionClassifier>` chosen once at startup
//! (hybrid when an API token is configured, lexicon otherwise). There is no
//! re-initialization mid-process; a broken token degrades per request, not
//! per process.

use async_trait::async_trait;
use tracing::warn;

use crate::emotion::external::{InferenceClient, ScoredLabel};
use crate::emotion::{lexicon, Classification, Emotion};

/// Classifiers never fail: any internal error resolves to the lexicon
/// result with `fallback = true`.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Classification;
}

/// Keyword-based classifier. Deterministic and dependency-free.
pub struct LexiconClassifier;

#[async_trait]
impl EmotionClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Classification {
        let (primary, secondary) = lexicon::classify(text);
        Classification {
            primary,
            secondary,
            fallback: true,
        }
    }
}

/// External model with lexicon fallback.
pub struct HybridClassifier {
    inference: InferenceClient,
}

impl HybridClassifier {
    pub fn new(inference: InferenceClient) -> Self {
        Self { inference }
    }
}

#[async_trait]
impl EmotionClassifier for HybridClassifier {
    async fn classify(&self, text: &str) -> Classification {
        match self.inference.classify_text(text).await {
            Ok(labels) => merge_external_output(&labels, text),
            Err(e) => {
                warn!("External classifier failed, using keyword fallback: {e}");
                let (primary, secondary) = lexicon::classify(text);
                Classification {
                    primary,
                    secondary,
                    fallback: true,
                }
            }
        }
    }
}

/// Maps an external label into the fixed vocabulary. Total: labels outside
/// the known set become `neutral` rather than an error.
fn map_external_label(label: &str) -> Emotion {
    Emotion::from_label(label).unwrap_or(Emotion::Neutral)
}

/// Builds a classification from external output (already sorted best
/// first). A single usable label keeps the external primary and borrows
/// the secondary from the lexicon; an empty list is a full fallback.
fn merge_external_output(labels: &[ScoredLabel], text: &str) -> Classification {
    let mut mapped = labels.iter().map(|l| map_external_label(&l.label));

    match mapped.next() {
        Some(primary) => {
            let secondary = match mapped.next() {
                Some(secondary) => secondary,
                None => lexicon::classify(text).1,
            };
            Classification {
                primary,
                secondary,
                fallback: false,
            }
        }
        None => {
            let (primary, secondary) = lexicon::classify(text);
            Classification {
                primary,
                secondary,
                fallback: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(label: &str, score: f64) -> ScoredLabel {
        ScoredLabel {
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_merge_uses_top_two_labels() {
        let labels = vec![
            scored("sadness", 0.8),
            scored("fear", 0.15),
            scored("neutral", 0.05),
        ];
        let result = merge_external_output(&labels, "whatever");
        assert_eq!(result.primary, Emotion::Sadness);
        assert_eq!(result.secondary, Emotion::Fear);
        assert!(!result.fallback);
    }

    #[test]
    fn test_merge_single_label_takes_lexicon_secondary() {
        let labels = vec![scored("anger", 0.99)];
        // "amor" scores love in the lexicon, but a single-emotion lexicon
        // result fills both slots with love.
        let result = merge_external_output(&labels, "amor");
        assert_eq!(result.primary, Emotion::Anger);
        assert_eq!(result.secondary, Emotion::Love);
        assert!(!result.fallback);
    }

    #[test]
    fn test_merge_empty_output_falls_back() {
        let result = merge_external_output(&[], "tengo miedo");
        assert_eq!(result.primary, Emotion::Fear);
        assert!(result.fallback);
    }

    #[test]
    fn test_unknown_external_label_maps_to_neutral() {
        assert_eq!(map_external_label("curiosity"), Emotion::Neutral);
        assert_eq!(map_external_label(""), Emotion::Neutral);
        assert_eq!(map_external_label("JOY"), Emotion::Joy);
    }

    #[tokio::test]
    async fn test_lexicon_classifier_marks_fallback() {
        let result = LexiconClassifier.classify("estoy muy feliz y contento").await;
        assert_eq!(result.primary, Emotion::Joy);
        assert!(result.fallback);
    }
}
