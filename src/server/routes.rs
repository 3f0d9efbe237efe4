//! HTTP routes for password evaluation.

use axum::{
    Form, Json, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::view;
use crate::evaluate_password_strength;
use crate::types::StrengthReport;

/// Request body for `POST /evaluate`.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub password: Option<String>,
}

/// Form body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct EvaluateForm {
    pub password: Option<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request carried no `password` field at all. An empty string
    /// is valid input, not an error.
    #[error("missing field: password")]
    MissingPassword,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingPassword => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorResponse {
            error: "missing_field".to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Create the routes
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/evaluate", post(evaluate_handler))
        .route("/health", get(health_handler))
}

/// GET / - Render the empty form
async fn index_handler() -> Html<String> {
    Html(view::render_page(None))
}

/// POST / - Evaluate the submitted form field and render the result
async fn submit_handler(Form(form): Form<EvaluateForm>) -> Result<Html<String>, ApiError> {
    let password = form.password.ok_or(ApiError::MissingPassword)?;
    let report = evaluate_password_strength(&SecretString::new(password.into()));
    Ok(Html(view::render_page(Some(&report))))
}

/// POST /evaluate - Evaluate and return the report as JSON
async fn evaluate_handler(
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<StrengthReport>, ApiError> {
    let password = request.password.ok_or(ApiError::MissingPassword)?;
    let report = evaluate_password_strength(&SecretString::new(password.into()));
    Ok(Json(report))
}

/// GET /health - Liveness check
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorClass, Strength};

    #[test]
    fn test_evaluate_request_deserialize() {
        let json = r#"{"password": "hunter2"}"#;
        let req: EvaluateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_evaluate_request_field_absent() {
        let req: EvaluateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.password.is_none());
    }

    #[tokio::test]
    async fn test_evaluate_handler_strong_password() {
        let response = evaluate_handler(Json(EvaluateRequest {
            password: Some("Abcdefgh1!".to_string()),
        }))
        .await
        .unwrap();

        assert_eq!(response.0.strength, Strength::Strong);
        assert_eq!(response.0.color_class, ColorClass::Green);
    }

    #[tokio::test]
    async fn test_evaluate_handler_empty_password_is_weak() {
        let response = evaluate_handler(Json(EvaluateRequest {
            password: Some(String::new()),
        }))
        .await
        .unwrap();

        assert_eq!(response.0.strength, Strength::Weak);
        assert!(!response.0.min_length);
    }

    #[tokio::test]
    async fn test_evaluate_handler_missing_password() {
        let result = evaluate_handler(Json(EvaluateRequest { password: None })).await;
        assert_eq!(result.unwrap_err(), ApiError::MissingPassword);
    }

    #[tokio::test]
    async fn test_submit_handler_renders_result() {
        let html = submit_handler(Form(EvaluateForm {
            password: Some("Abcdefgh1!".to_string()),
        }))
        .await
        .unwrap();

        assert!(html.0.contains("Strong"));
        assert!(html.0.contains("text-green-600"));
    }

    #[tokio::test]
    async fn test_submit_handler_missing_password() {
        let result = submit_handler(Form(EvaluateForm { password: None })).await;
        assert_eq!(result.unwrap_err(), ApiError::MissingPassword);
    }

    #[tokio::test]
    async fn test_index_handler_renders_empty_form() {
        let html = index_handler().await;
        assert!(html.0.contains("<form"));
        assert!(!html.0.contains("class=\"result\""));
    }

    #[test]
    fn test_api_error_maps_to_bad_request() {
        let response = ApiError::MissingPassword.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
