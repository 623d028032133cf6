//! Input validation for mood submissions.

use crate::errors::AppError;

/// Hard cap on submission length, in characters.
pub const MAX_TEXT_LEN: usize = 500;

/// Validates and normalizes submitted mood text.
///
/// Trims surrounding whitespace and rejects empty or over-long input with
/// user-facing Spanish messages. Validation failures never create entries.
pub fn validate_text(raw: &str) -> Result<String, AppError> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(AppError::Validation(
            "El texto no puede estar vacío".to_string(),
        ));
    }

    if text.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::Validation(
            "El texto es demasiado largo (máximo 500 caracteres)".to_string(),
        ));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert!(validate_text("").is_err());
    }

    #[test]
    fn test_whitespace_only_rejected() {
        assert!(validate_text("   \n\t  ").is_err());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let text = validate_text("  me siento bien  ").unwrap();
        assert_eq!(text, "me siento bien");
    }

    #[test]
    fn test_max_length_accepted() {
        let text = "a".repeat(MAX_TEXT_LEN);
        assert_eq!(validate_text(&text).unwrap().len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_over_max_length_rejected() {
        let text = "a".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_text(&text).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 500 accented characters exceed 500 bytes but are still valid.
        let text = "é".repeat(MAX_TEXT_LEN);
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = validate_text("").unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "El texto no puede estar vacío"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
