use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised by the evaluation core.
///
/// The core signals these immediately instead of substituting a neutral
/// value; degrading gracefully is the calling layer's decision.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("price series is empty")]
    EmptySeries,

    #[error("peak price is zero, drawdown undefined")]
    ZeroPeak,

    #[error("no threshold rule matched drawdown {0}%")]
    NoMatchingRule(f64),

    #[error("sentiment value {0} outside 0-100")]
    SentimentOutOfRange(i32),
}

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Eval(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            AppError::Reqwest(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            AppError::SerdeJson(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Anyhow(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_error_messages() {
        assert_eq!(
            EvalError::EmptySeries.to_string(),
            "price series is empty"
        );
        assert_eq!(
            EvalError::SentimentOutOfRange(101).to_string(),
            "sentiment value 101 outside 0-100"
        );
    }

    #[test]
    fn test_eval_error_equality() {
        assert_eq!(EvalError::ZeroPeak, EvalError::ZeroPeak);
        assert_ne!(
            EvalError::NoMatchingRule(-5.0),
            EvalError::NoMatchingRule(-6.0)
        );
    }

    #[test]
    fn test_app_error_from_eval_error() {
        let app: AppError = EvalError::EmptySeries.into();
        assert!(matches!(app, AppError::Eval(EvalError::EmptySeries)));
    }
}
