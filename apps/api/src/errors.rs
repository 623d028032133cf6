use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Failures of external content services (classifier, music, books) never
/// become an `AppError`: those paths degrade to fallbacks and placeholders
/// inside their own modules.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or unusable deployment configuration, e.g. Spotify
    /// credentials not set. Distinct from validation so operators can tell
    /// a bad request from a bad deploy.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message safe to show the user. Validation and configuration errors
    /// carry their own Spanish text; everything else collapses into the
    /// generic apology so internals never leak.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Configuration(msg) => format!("Error de configuración: {msg}"),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Database(_) | AppError::Internal(_) => {
                "Lo sentimos, ha ocurrido un error inesperado".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::Validation("El texto no puede estar vacío".to_string());
        assert_eq!(err.user_message(), "El texto no puede estar vacío");
    }

    #[test]
    fn test_configuration_message_is_prefixed() {
        let err = AppError::Configuration("Credenciales de Spotify no configuradas".to_string());
        assert_eq!(
            err.user_message(),
            "Error de configuración: Credenciales de Spotify no configuradas"
        );
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let err = AppError::Internal(anyhow::anyhow!("connection pool exhausted at 10.0.0.3"));
        assert_eq!(err.user_message(), "Lo sentimos, ha ocurrido un error inesperado");
    }
}
