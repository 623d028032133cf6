//! Emotion → search-term tables shared by the recommenders.
//!
//! The music tables are mirrored from the curation used by the product
//! (joy doubles as the default row for emotions without their own list);
//! the book table covers every emotion, with plain `fiction` for neutral.

use rand::seq::SliceRandom;

use crate::emotion::Emotion;

/// Spotify genre qualifiers per emotion.
pub fn music_genres(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy | Emotion::Love => &["pop", "latin"],
        Emotion::Sadness | Emotion::Fear => &["rock"],
        Emotion::Anger => &["rock", "hip-hop"],
        Emotion::Surprise | Emotion::Disgust | Emotion::Neutral => &["pop", "latin"],
    }
}

/// Free-text mood terms used in track search.
pub fn music_terms(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &["happy", "upbeat", "fun"],
        Emotion::Sadness => &["sad", "melancholic", "slow"],
        Emotion::Anger => &["powerful", "intense", "strong"],
        Emotion::Fear => &["calm", "peaceful", "quiet"],
        Emotion::Love => &["romantic", "love song", "sweet"],
        Emotion::Surprise | Emotion::Disgust | Emotion::Neutral => &["happy", "upbeat", "fun"],
    }
}

/// Subject terms for the book search.
pub fn book_terms(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Joy => &["inspirational", "humor", "feel-good", "comedy", "uplifting"],
        Emotion::Sadness => &["moving", "emotional", "literary fiction", "drama", "poetry"],
        Emotion::Anger => &["empowerment", "social justice", "revolution", "transformation"],
        Emotion::Fear => &["psychological thriller", "mystery", "suspense", "gothic"],
        Emotion::Love => &["romance", "relationships", "contemporary love", "passion"],
        Emotion::Surprise => &["magical realism", "science fiction", "fantasy", "adventure"],
        Emotion::Disgust => &["dystopian", "dark fiction", "critique", "satire"],
        Emotion::Neutral => &["fiction"],
    }
}

/// Uniform random pick. The tables above are all non-empty, so the empty
/// case never fires in practice.
pub fn pick<'a>(options: &[&'a str]) -> &'a str {
    options.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
}
