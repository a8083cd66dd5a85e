use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::document_packs::{dispatch_status, CatalogError, DispatchError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("document pack error: {0}")]
    Dispatch(#[from] DispatchError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid case json: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Dispatch(err) => dispatch_status(err),
            AppError::Catalog(CatalogError::UnknownLetter(_)) => StatusCode::NOT_FOUND,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::document_packs::{LetterId, ResolveError};

    #[test]
    fn unknown_letter_maps_to_not_found() {
        let error = AppError::from(CatalogError::UnknownLetter("nope".to_string()));
        assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn undefined_scenario_maps_to_not_implemented() {
        let error = AppError::from(DispatchError::from(ResolveError::Undefined {
            letter_id: LetterId::AosResponse,
        }));
        assert_eq!(error.into_response().status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[test]
    fn config_errors_are_internal() {
        let error = AppError::from(ConfigError::InvalidPort);
        assert!(error.to_string().contains("APP_PORT"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn malformed_case_json_is_a_bad_request() {
        let parsed: Result<serde_json::Value, _> = serde_json::from_str("{ \"id\": ");
        let error = AppError::from(parsed.expect_err("truncated json"));

        assert!(error.to_string().starts_with("invalid case json: "));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
