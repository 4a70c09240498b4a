//! HTTP error mapping
//!
//! Every handler failure becomes a JSON body with the status chosen from the
//! error kind. Internal faults are logged and their details withheld.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::DashboardError;

/// Handler error, rendered as `{"error": ..., "code": ...}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Request body or query string that could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Dashboard(err) => match err {
                DashboardError::InvalidCredentials | DashboardError::Unauthenticated => {
                    StatusCode::UNAUTHORIZED
                }
                DashboardError::Forbidden(_) => StatusCode::FORBIDDEN,
                DashboardError::NotFound { .. } => StatusCode::NOT_FOUND,
                DashboardError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                DashboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match &self {
            ApiError::Dashboard(DashboardError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal error");
                ("INTERNAL_ERROR", "An internal error occurred".to_string())
            }
            ApiError::Dashboard(err) => (err.code(), err.to_string()),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DashboardError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (DashboardError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (DashboardError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (DashboardError::event_not_found("9"), StatusCode::NOT_FOUND),
            (DashboardError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (DashboardError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_message_is_hidden() {
        let response = ApiError::from(DashboardError::Internal("bcrypt exploded".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal error occurred");
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("bcrypt exploded"));
    }

    #[tokio::test]
    async fn test_expected_errors_keep_their_message() {
        let body = body_json(ApiError::from(DashboardError::event_not_found("9")).into_response()).await;
        assert_eq!(body["error"], "Event with id 9 not found");
        assert_eq!(body["code"], "NOT_FOUND");
    }
}
