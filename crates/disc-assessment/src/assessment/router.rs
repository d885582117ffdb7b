use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::AnswerSet;
use super::engine::AssessmentEngine;
use super::lifecycle::{LifecycleSink, SessionId};
use super::report::AssessmentReport;

/// Request body shared by the progress and results endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerSubmission {
    /// Id returned by the questions endpoint; omitted submissions get a fresh one.
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub answers: AnswerSet,
}

/// Router builder exposing the questionnaire and scoring endpoints.
pub fn assessment_router<S>(engine: Arc<AssessmentEngine<S>>) -> Router
where
    S: LifecycleSink + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessment/profiles", get(profiles_handler::<S>))
        .route("/api/v1/assessment/progress", post(progress_handler::<S>))
        .route("/api/v1/assessment/results", post(results_handler::<S>))
        .with_state(engine)
}

pub(crate) async fn questions_handler<S>(
    State(engine): State<Arc<AssessmentEngine<S>>>,
) -> Response
where
    S: LifecycleSink + 'static,
{
    let session_id = engine.record_started();
    let payload = json!({
        "session_id": session_id,
        "question_count": engine.question_count(),
        "questions": engine.catalog().questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn profiles_handler<S>(
    State(engine): State<Arc<AssessmentEngine<S>>>,
) -> Response
where
    S: LifecycleSink + 'static,
{
    let payload = json!({ "profiles": engine.profile_table().entries() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn progress_handler<S>(
    State(engine): State<Arc<AssessmentEngine<S>>>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    S: LifecycleSink + 'static,
{
    let completeness = engine.progress(&submission.answers);
    (StatusCode::OK, axum::Json(completeness)).into_response()
}

pub(crate) async fn results_handler<S>(
    State(engine): State<Arc<AssessmentEngine<S>>>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    S: LifecycleSink + 'static,
{
    match engine.evaluate_for(submission.session_id, &submission.answers) {
        Ok(result) => {
            let report = AssessmentReport::build(&result);
            (StatusCode::OK, axum::Json(report)).into_response()
        }
        Err(error) => {
            let completeness = engine.progress(&submission.answers);
            let payload = json!({
                "error": error.to_string(),
                "outstanding": completeness.outstanding,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
