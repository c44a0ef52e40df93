use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::super::domain::SurveyResponse;
use super::repository::SubmissionRepository;
use super::service::{SubmissionError, SurveyService};
use super::session::{SessionResolver, SESSION_HEADER};

/// Router builder exposing submission, retrieval and analytics endpoints.
pub fn survey_router<R, S>(service: Arc<SurveyService<R, S>>) -> Router
where
    R: SubmissionRepository + 'static,
    S: SessionResolver + 'static,
{
    Router::new()
        .route("/api/survey/submit", post(submit_handler::<R, S>))
        .route("/api/survey/my-response", get(my_response_handler::<R, S>))
        .route("/api/survey/analytics", get(analytics_handler::<R, S>))
        .with_state(service)
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Status and JSON payload for a failed survey request.
pub(crate) fn error_response(error: SubmissionError) -> Response {
    let status = match &error {
        SubmissionError::Session(_) => StatusCode::UNAUTHORIZED,
        SubmissionError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmissionError::NoSurvey => StatusCode::NOT_FOUND,
        SubmissionError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(%error, "survey request failed");
    } else {
        tracing::debug!(%error, status = status.as_u16(), "survey request rejected");
    }

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<R, S>(
    State(service): State<Arc<SurveyService<R, S>>>,
    headers: HeaderMap,
    axum::Json(response): axum::Json<SurveyResponse>,
) -> Response
where
    R: SubmissionRepository + 'static,
    S: SessionResolver + 'static,
{
    match service.submit(session_token(&headers), response) {
        Ok(record) => {
            let payload = json!({
                "message": "Survey submitted successfully",
                "survey_id": record.survey_id.0,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn my_response_handler<R, S>(
    State(service): State<Arc<SurveyService<R, S>>>,
    headers: HeaderMap,
) -> Response
where
    R: SubmissionRepository + 'static,
    S: SessionResolver + 'static,
{
    match service.current(session_token(&headers)) {
        Ok(record) => {
            let payload = json!({ "survey": record });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analytics_handler<R, S>(
    State(service): State<Arc<SurveyService<R, S>>>,
    headers: HeaderMap,
) -> Response
where
    R: SubmissionRepository + 'static,
    S: SessionResolver + 'static,
{
    match service.analytics(session_token(&headers)) {
        Ok(analytics) => (StatusCode::OK, axum::Json(analytics)).into_response(),
        Err(error) => error_response(error),
    }
}
