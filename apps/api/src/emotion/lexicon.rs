//! Keyword-based emotion scoring.
//!
//! The deterministic classifier behind `LexiconClassifier`: no model, no
//! network, just weighted keyword matching against per-emotion word lists.
//! It backs every request when no external classifier is configured and
//! every request the external classifier fails.

use crate::emotion::Emotion;

const EXACT_MATCH_WEIGHT: u32 = 2;
const PARTIAL_MATCH_WEIGHT: u32 = 1;

/// Returned when nothing in the text matches any keyword.
const DEFAULT_PAIR: (Emotion, Emotion) = (Emotion::Joy, Emotion::Love);

/// Keyword lists per emotion, in tie-break order: when two emotions score
/// equal, the one listed earlier wins. `neutral` has no keywords; it only
/// ever comes from the external classifier.
const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Joy,
        &[
            "feliz",
            "contento",
            "contenta",
            "alegre",
            "bien",
            "genial",
            "fantástico",
            "excelente",
        ],
    ),
    (Emotion::Sadness, &["triste", "mal", "deprimido", "deprimida"]),
    (
        Emotion::Anger,
        &["enojado", "enojada", "molesto", "molesta", "furioso", "furiosa"],
    ),
    (
        Emotion::Love,
        &["enamorado", "enamorada", "amor", "quiero", "adoro"],
    ),
    (
        Emotion::Fear,
        &["miedo", "asustado", "asustada", "preocupado", "preocupada"],
    ),
    (
        Emotion::Surprise,
        &["sorpresa", "sorprendido", "sorprendida", "asombrado", "asombrada"],
    ),
    (
        Emotion::Disgust,
        &["asco", "asqueado", "asqueada", "repugnante", "desagradable"],
    ),
];

/// Scores `text` against the keyword table and returns (primary, secondary).
///
/// Tokens are whitespace-split and matched lowercase. An exact keyword hit
/// scores 2, a keyword contained inside a longer token scores 1 (exclusive:
/// a token contributes at most one hit per emotion). If every emotion scores
/// zero the default pair is returned; if only one emotion scores, it fills
/// both slots.
pub fn classify(text: &str) -> (Emotion, Emotion) {
    let text = text.to_lowercase();
    let mut scores: Vec<(Emotion, u32)> =
        EMOTION_KEYWORDS.iter().map(|(emotion, _)| (*emotion, 0)).collect();

    for token in text.split_whitespace() {
        for (idx, (_, keywords)) in EMOTION_KEYWORDS.iter().enumerate() {
            if keywords.contains(&token) {
                scores[idx].1 += EXACT_MATCH_WEIGHT;
            } else if keywords.iter().any(|keyword| token.contains(keyword)) {
                scores[idx].1 += PARTIAL_MATCH_WEIGHT;
            }
        }
    }

    if scores.iter().all(|(_, score)| *score == 0) {
        return DEFAULT_PAIR;
    }

    // Stable sort: ties keep table order.
    scores.sort_by(|a, b| b.1.cmp(&a.1));

    let primary = scores[0].0;
    let secondary = if scores[1].1 > 0 { scores[1].0 } else { primary };
    (primary, secondary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_returns_default_pair() {
        assert_eq!(classify("hoy fui al supermercado"), DEFAULT_PAIR);
    }

    #[test]
    fn test_empty_text_returns_default_pair() {
        assert_eq!(classify(""), DEFAULT_PAIR);
    }

    #[test]
    fn test_single_keyword_sets_primary() {
        let (primary, secondary) = classify("tengo miedo");
        assert_eq!(primary, Emotion::Fear);
        // Only one emotion scored, so it fills both slots.
        assert_eq!(secondary, Emotion::Fear);
    }

    #[test]
    fn test_two_exact_matches_beat_one() {
        // "feliz" and "contento" are exact joy hits; "amor" is one love hit.
        let (primary, secondary) = classify("estoy feliz y contento por este amor");
        assert_eq!(primary, Emotion::Joy);
        assert_eq!(secondary, Emotion::Love);
    }

    #[test]
    fn test_classic_happy_submission() {
        let (primary, _) = classify("estoy muy feliz y contento");
        assert_eq!(primary, Emotion::Joy);
    }

    #[test]
    fn test_case_insensitive() {
        let (primary, _) = classify("Estoy TRISTE");
        assert_eq!(primary, Emotion::Sadness);
    }

    #[test]
    fn test_substring_scores_less_than_exact() {
        // "tristeza" only contains "triste" (+1); "enojado" is exact (+2).
        let (primary, secondary) = classify("tristeza enojado");
        assert_eq!(primary, Emotion::Anger);
        assert_eq!(secondary, Emotion::Sadness);
    }

    #[test]
    fn test_punctuation_downgrades_to_substring() {
        // "feliz!" is not an exact token but still contains the keyword.
        let (primary, _) = classify("feliz! enojado");
        assert_eq!(primary, Emotion::Anger);
    }

    #[test]
    fn test_tie_break_keeps_table_order() {
        // One exact hit each for sadness and anger; sadness is listed first.
        let (primary, secondary) = classify("triste enojado");
        assert_eq!(primary, Emotion::Sadness);
        assert_eq!(secondary, Emotion::Anger);
    }

    #[test]
    fn test_supplemental_emotions_score() {
        let (primary, _) = classify("qué sorpresa tan grande");
        assert_eq!(primary, Emotion::Surprise);

        let (primary, _) = classify("esto me da asco");
        assert_eq!(primary, Emotion::Disgust);
    }

    #[test]
    fn test_neutral_never_comes_from_keywords() {
        for (emotion, keywords) in EMOTION_KEYWORDS {
            assert_ne!(*emotion, Emotion::Neutral);
            assert!(!keywords.is_empty());
        }
    }
}
