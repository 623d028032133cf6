//! Mood trend over recent history.
//!
//! A moving-average comparison, not a statistical trend test: the newer
//! half of the last few entries is averaged against the older half and the
//! delta is bucketed into improving / worsening / stable.

use crate::emotion::Emotion;

/// Entries examined per trend computation.
pub const TREND_WINDOW: i64 = 5;

/// Mean-valence delta beyond which the trend leaves "stable".
const TREND_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTrend {
    Improving,
    Worsening,
    Stable,
}

/// Fixed valence per emotion.
pub fn valence(emotion: Emotion) -> f64 {
    match emotion {
        Emotion::Joy | Emotion::Love => 1.0,
        Emotion::Surprise => 0.5,
        Emotion::Neutral => 0.0,
        Emotion::Fear => -0.5,
        Emotion::Anger | Emotion::Sadness | Emotion::Disgust => -1.0,
    }
}

/// Valence of a stored label. Labels outside the vocabulary count as 0
/// rather than poisoning the average.
pub fn valence_of_label(label: &str) -> f64 {
    Emotion::from_label(label).map(valence).unwrap_or(0.0)
}

/// Computes the trend from valences ordered newest first.
///
/// Fewer than two data points carry no signal and yield `None`. Otherwise
/// the newest ⌈n/2⌉ values are averaged against the remaining older ones;
/// for the full five-entry window that is the newest three against the
/// oldest two.
pub fn compute_trend(valences_newest_first: &[f64]) -> Option<MoodTrend> {
    let n = valences_newest_first.len();
    if n < 2 {
        return None;
    }

    let split = (n + 1) / 2;
    let newer = mean(&valences_newest_first[..split]);
    let older = mean(&valences_newest_first[split..]);
    let delta = newer - older;

    if delta > TREND_THRESHOLD {
        Some(MoodTrend::Improving)
    } else if delta < -TREND_THRESHOLD {
        Some(MoodTrend::Worsening)
    } else {
        Some(MoodTrend::Stable)
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Spanish message for a (trend, current emotion) pair. Joy and sadness
/// have dedicated texts; everything else gets the per-trend default.
pub fn trend_message(trend: MoodTrend, emotion: Emotion) -> &'static str {
    match (trend, emotion) {
        (MoodTrend::Improving, Emotion::Joy) => {
            "¡Excelente! Tu estado de ánimo está mejorando. ¡Sigue así!"
        }
        (MoodTrend::Improving, Emotion::Sadness) => {
            "Aunque hoy te sientas triste, veo que has tenido mejores momentos recientemente."
        }
        (MoodTrend::Improving, _) => {
            "Veo una tendencia positiva en tu estado de ánimo. ¡Eso es genial!"
        }
        (MoodTrend::Worsening, Emotion::Joy) => {
            "¡Qué bueno verte feliz hoy! Es un cambio positivo respecto a días anteriores."
        }
        (MoodTrend::Worsening, Emotion::Sadness) => {
            "He notado que has estado pasando por momentos difíciles. ¿Has considerado hablar con alguien al respecto?"
        }
        (MoodTrend::Worsening, _) => {
            "Últimamente has experimentado emociones más intensas. Recuerda que estoy aquí para escucharte."
        }
        (MoodTrend::Stable, Emotion::Joy) => "¡Sigues manteniendo un estado de ánimo positivo!",
        (MoodTrend::Stable, Emotion::Sadness) => {
            "Has estado experimentando tristeza por un tiempo. Recuerda que buscar ayuda es un signo de fortaleza."
        }
        (MoodTrend::Stable, _) => "Tu estado emocional se ha mantenido estable.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signal_below_two_entries() {
        assert_eq!(compute_trend(&[]), None);
        assert_eq!(compute_trend(&[1.0]), None);
    }

    #[test]
    fn test_two_entries_split_one_one() {
        // Newest 1.0 vs oldest -1.0: delta 2.0 => improving.
        assert_eq!(compute_trend(&[1.0, -1.0]), Some(MoodTrend::Improving));
        assert_eq!(compute_trend(&[-1.0, 1.0]), Some(MoodTrend::Worsening));
    }

    #[test]
    fn test_three_entries_split_two_one() {
        // mean(1.0, 1.0) - mean(-1.0) = 2.0 => improving.
        assert_eq!(compute_trend(&[1.0, 1.0, -1.0]), Some(MoodTrend::Improving));
    }

    #[test]
    fn test_five_entries_split_three_two() {
        // Newest three average 1.0, oldest two average -1.0.
        let valences = [1.0, 1.0, 1.0, -1.0, -1.0];
        assert_eq!(compute_trend(&valences), Some(MoodTrend::Improving));
    }

    #[test]
    fn test_stable_inside_threshold() {
        // delta = 0.25, inside ±0.3.
        assert_eq!(compute_trend(&[0.25, 0.0]), Some(MoodTrend::Stable));
        assert_eq!(compute_trend(&[-0.25, 0.0]), Some(MoodTrend::Stable));
        assert_eq!(compute_trend(&[0.5, 0.5, 0.5]), Some(MoodTrend::Stable));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // delta exactly 0.3 stays stable.
        assert_eq!(compute_trend(&[0.3, 0.0]), Some(MoodTrend::Stable));
        assert_eq!(compute_trend(&[-0.3, 0.0]), Some(MoodTrend::Stable));
    }

    #[test]
    fn test_worsening_run() {
        let valences = [-1.0, -1.0, -0.5, 1.0, 1.0];
        assert_eq!(compute_trend(&valences), Some(MoodTrend::Worsening));
    }

    #[test]
    fn test_valence_table() {
        assert_eq!(valence(Emotion::Joy), 1.0);
        assert_eq!(valence(Emotion::Love), 1.0);
        assert_eq!(valence(Emotion::Surprise), 0.5);
        assert_eq!(valence(Emotion::Neutral), 0.0);
        assert_eq!(valence(Emotion::Fear), -0.5);
        assert_eq!(valence(Emotion::Anger), -1.0);
        assert_eq!(valence(Emotion::Sadness), -1.0);
        assert_eq!(valence(Emotion::Disgust), -1.0);
    }

    #[test]
    fn test_unknown_label_counts_as_zero() {
        assert_eq!(valence_of_label("melancholy"), 0.0);
        assert_eq!(valence_of_label("joy"), 1.0);
        assert_eq!(valence_of_label("SADNESS"), -1.0);
    }

    #[test]
    fn test_messages_cover_every_pair() {
        for trend in [MoodTrend::Improving, MoodTrend::Worsening, MoodTrend::Stable] {
            for emotion in Emotion::ALL {
                assert!(!trend_message(trend, emotion).is_empty());
            }
        }
    }

    #[test]
    fn test_dedicated_messages_for_joy_and_sadness() {
        assert_eq!(
            trend_message(MoodTrend::Improving, Emotion::Joy),
            "¡Excelente! Tu estado de ánimo está mejorando. ¡Sigue así!"
        );
        assert_ne!(
            trend_message(MoodTrend::Stable, Emotion::Sadness),
            trend_message(MoodTrend::Stable, Emotion::Anger)
        );
    }
}
