//! Server-rendered pages: the Spanish submission form, its result view,
//! and the static assets behind the stats page.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{error, warn};

use crate::emotion::Emotion;
use crate::errors::AppError;
use crate::moods::submit::{process_submission, MoodMatchOutcome};
use crate::state::AppState;

const FORM_HTML: &str = include_str!("../ui/form.html");
const STATS_HTML: &str = include_str!("../ui/stats.html");
const STATS_JS: &str = include_str!("../ui/stats.js");

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MoodMatch</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #f4f1ea;
            color: #2f2a25;
            line-height: 1.6;
        }
        main { max-width: 680px; margin: 0 auto; padding: 32px 20px; }
        h1 { color: #7c5cbf; margin-bottom: 4px; }
        .subtitle { color: #8a8178; margin-bottom: 24px; }
        .card {
            background: #fff;
            border: 1px solid #e2dcd2;
            border-radius: 10px;
            padding: 18px 20px;
            margin-bottom: 16px;
        }
        .card h2 { font-size: 17px; color: #7c5cbf; margin-bottom: 8px; }
        .emotion-label { font-size: 22px; font-weight: 600; }
        .notice { color: #8a8178; font-size: 14px; margin-top: 6px; }
        .trend { background: #efe9fb; border-color: #d8c9f2; }
        .error {
            background: #fbeaea;
            border: 1px solid #e8b7b7;
            border-radius: 10px;
            padding: 14px 16px;
            margin-bottom: 16px;
            color: #8c3030;
        }
        blockquote {
            border-left: 4px solid #7c5cbf;
            padding-left: 12px;
            margin-bottom: 10px;
            font-style: italic;
        }
        textarea {
            width: 100%;
            border: 1px solid #cfc7ba;
            border-radius: 8px;
            padding: 10px;
            font: inherit;
            resize: vertical;
        }
        button {
            margin-top: 12px;
            background: #7c5cbf;
            color: #fff;
            border: none;
            border-radius: 8px;
            padding: 10px 18px;
            font-size: 15px;
            cursor: pointer;
        }
        button:hover { background: #6a4caa; }
        a { color: #7c5cbf; }
        audio { width: 100%; margin-top: 8px; }
        .back { display: inline-block; margin-top: 8px; }
    </style>
</head>
<body>
<main>
<h1>MoodMatch</h1>
<p class="subtitle">Cuéntame cómo te sientes y te recomendaré música, lectura y un consejo.</p>
"#;

const PAGE_FOOTER: &str = "</main>\n</body>\n</html>\n";

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub text: String,
}

/// GET /
/// The empty submission form.
pub async fn show_form() -> Html<String> {
    Html(render_form_page(None))
}

/// POST /
/// Runs the submission pipeline and renders the result page. Failures
/// re-render the form carrying only the user-visible message.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Html<String> {
    match process_submission(&state, &form.text).await {
        Ok(outcome) => Html(render_result_page(&outcome)),
        Err(e) => {
            match &e {
                AppError::Validation(msg) => warn!("Rejected form submission: {msg}"),
                other => error!("Form submission failed: {other}"),
            }
            Html(render_form_page(Some(&e.user_message())))
        }
    }
}

/// GET /admin/stats
pub async fn show_stats() -> Html<&'static str> {
    Html(STATS_HTML)
}

/// GET /static/stats.js
pub async fn serve_stats_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        STATS_JS,
    )
        .into_response()
}

// ────────────────────────── Rendering ──────────────────────────

fn render_form_page(error: Option<&str>) -> String {
    let mut html = String::from(PAGE_HEADER);
    if let Some(message) = error {
        html.push_str(&format!(
            "<div class=\"error\">{}</div>\n",
            escape_html(message)
        ));
    }
    html.push_str(FORM_HTML);
    html.push_str(PAGE_FOOTER);
    html
}

fn render_result_page(outcome: &MoodMatchOutcome) -> String {
    let mut html = String::from(PAGE_HEADER);

    // Emotion. Static vocabulary labels, no escaping needed.
    html.push_str("<div class=\"card\">\n<h2>Tu emoción</h2>\n");
    html.push_str(&format!(
        "<p class=\"emotion-label\">{}</p>\n",
        display_name_es(outcome.primary)
    ));
    if outcome.secondary != outcome.primary {
        html.push_str(&format!(
            "<p>También percibo algo de <strong>{}</strong>.</p>\n",
            display_name_es(outcome.secondary)
        ));
    }
    if outcome.is_fallback {
        html.push_str(
            "<p class=\"notice\">Análisis realizado con el clasificador de palabras clave.</p>\n",
        );
    }
    html.push_str("</div>\n");

    if let Some(message) = outcome.trend_message {
        html.push_str(&format!(
            "<div class=\"card trend\">\n<h2>Tu tendencia</h2>\n<p>{message}</p>\n</div>\n"
        ));
    }

    html.push_str(&format!(
        "<div class=\"card\">\n<h2>Un consejo para ti</h2>\n<blockquote>{}</blockquote>\n<p>{}</p>\n</div>\n",
        outcome.advice.phrase, outcome.advice.advice
    ));

    // Song and book come from external services: escape everything.
    html.push_str("<div class=\"card\">\n<h2>Una canción para este momento</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> — {}</p>\n",
        escape_html(&outcome.song.name),
        escape_html(&outcome.song.artist)
    ));
    if let Some(preview) = &outcome.song.preview_url {
        html.push_str(&format!(
            "<audio controls src=\"{}\"></audio>\n",
            escape_html(preview)
        ));
    }
    html.push_str(&format!(
        "<p><a href=\"{}\">Escuchar en Spotify</a></p>\n</div>\n",
        escape_html(&outcome.song.url)
    ));

    html.push_str("<div class=\"card\">\n<h2>Una lectura para acompañarte</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> — {}</p>\n",
        escape_html(&outcome.book.title),
        escape_html(&outcome.book.author)
    ));
    if !outcome.book.description.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", escape_html(&outcome.book.description)));
    }
    html.push_str(&format!(
        "<p><a href=\"{}\">Ver libro</a></p>\n</div>\n",
        escape_html(&outcome.book.url)
    ));

    html.push_str("<a class=\"back\" href=\"/\">← Contar otro momento</a>\n");
    html.push_str(PAGE_FOOTER);
    html
}

/// Spanish display name for the page. The stored labels stay English.
fn display_name_es(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Joy => "alegría",
        Emotion::Sadness => "tristeza",
        Emotion::Anger => "ira",
        Emotion::Fear => "miedo",
        Emotion::Love => "amor",
        Emotion::Surprise => "sorpresa",
        Emotion::Disgust => "asco",
        Emotion::Neutral => "neutral",
    }
}

/// Minimal HTML escaping for values interpolated into pages.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moods::advice::advice_for;
    use crate::recommend::books::Book;
    use crate::recommend::spotify::Song;

    fn outcome() -> MoodMatchOutcome {
        MoodMatchOutcome {
            primary: Emotion::Joy,
            secondary: Emotion::Love,
            is_fallback: false,
            advice: advice_for(Emotion::Joy),
            trend_message: Some("Tu estado emocional se ha mantenido estable."),
            song: Song {
                name: "Vivir Mi Vida".to_string(),
                artist: "Marc Anthony".to_string(),
                url: "https://open.spotify.com/track/abc".to_string(),
                preview_url: None,
                unavailable: false,
            },
            book: Book {
                title: "Cien años de soledad".to_string(),
                author: "Gabriel García Márquez".to_string(),
                url: "https://books.google.com/books?id=abc".to_string(),
                description: "La novela...".to_string(),
                unavailable: false,
            },
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("sin cambios"), "sin cambios");
    }

    #[test]
    fn test_result_page_escapes_external_values() {
        let mut o = outcome();
        o.song.name = "<script>alert('x')</script>".to_string();
        let html = render_result_page(&o);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_result_page_contains_sections() {
        let html = render_result_page(&outcome());
        assert!(html.contains("Tu emoción"));
        assert!(html.contains("alegría"));
        assert!(html.contains("Marc Anthony"));
        assert!(html.contains("Cien años de soledad"));
        assert!(html.contains("Tu tendencia"));
    }

    #[test]
    fn test_fallback_notice_shown_only_when_flagged() {
        let mut o = outcome();
        assert!(!render_result_page(&o).contains("clasificador de palabras clave"));
        o.is_fallback = true;
        assert!(render_result_page(&o).contains("clasificador de palabras clave"));
    }

    #[test]
    fn test_form_page_carries_error_message() {
        let html = render_form_page(Some("El texto no puede estar vacío"));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("El texto no puede estar vacío"));
        assert!(html.contains("name=\"text\""));
    }

    #[test]
    fn test_form_page_without_error_has_no_error_box() {
        assert!(!render_form_page(None).contains("class=\"error\""));
    }

    #[test]
    fn test_display_names_cover_vocabulary() {
        for emotion in Emotion::ALL {
            assert!(!display_name_es(emotion).is_empty());
        }
    }
}
