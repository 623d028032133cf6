pub mod classifier;
pub mod external;
pub mod lexicon;

use serde::{Deserialize, Serialize};

/// The closed emotion vocabulary. Every classification result, stored
/// entry and lookup table resolves to one of these eight labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Love,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Love,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    /// Canonical lowercase label, as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Love => "love",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    /// Parses a stored or external label, case-insensitively.
    /// Returns `None` for anything outside the vocabulary.
    pub fn from_label(label: &str) -> Option<Emotion> {
        let normalized = label.trim().to_lowercase();
        Emotion::ALL.into_iter().find(|e| e.as_str() == normalized)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of one classification pass: the two strongest emotions plus
/// whether the result came from the keyword fallback instead of the
/// external model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub primary: Emotion,
    pub secondary: Emotion,
    pub fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(Emotion::from_label("JOY"), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label("Sadness"), Some(Emotion::Sadness));
        assert_eq!(Emotion::from_label("  fear  "), Some(Emotion::Fear));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(Emotion::from_label("ecstatic"), None);
        assert_eq!(Emotion::from_label(""), None);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Emotion::Surprise).unwrap();
        assert_eq!(json, "\"surprise\"");
        let parsed: Emotion = serde_json::from_str("\"disgust\"").unwrap();
        assert_eq!(parsed, Emotion::Disgust);
    }
}
