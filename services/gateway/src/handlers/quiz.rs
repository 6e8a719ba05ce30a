use crate::error::AppError;
use crate::models::{BandsResponse, QuestionsResponse, QuizSubmission};
use crate::state::AppState;
use axum::{
    Form, Json,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    response::{IntoResponse, Response},
};

pub async fn get_questions(State(state): State<AppState>) -> Response {
    let questionnaire = state.engine.questionnaire();
    Json(QuestionsResponse {
        questions: questionnaire.questions(),
        min_total: questionnaire.min_total(),
        max_total: questionnaire.max_total(),
    })
    .into_response()
}

pub async fn get_bands(State(state): State<AppState>) -> Response {
    Json(BandsResponse {
        bands: state.engine.bands().bands(),
    })
    .into_response()
}

/// Score a JSON submission
pub async fn score_json(
    State(state): State<AppState>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(submission) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    score_pairs(&state, submission.into_pairs())
}

/// Score a form-encoded submission
///
/// Fields are extracted as ordered pairs so a repeated field is seen
/// twice by the engine instead of collapsing to its last value.
pub async fn score_form(
    State(state): State<AppState>,
    payload: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(fields) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    score_pairs(&state, fields)
}

fn score_pairs<I>(state: &AppState, pairs: I) -> Result<Response, AppError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let result = state.engine.score_submission(pairs)?;

    tracing::info!(
        total = result.total_score,
        band = %result.band.label,
        "quiz scored"
    );

    Ok(Json(result).into_response())
}
