use crate::error::AppError;
use crate::models::TopicsResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use types::ids::TopicId;
use types::topic::Topic;

pub async fn list_topics(State(state): State<AppState>) -> Response {
    Json(TopicsResponse {
        topics: state.topics.iter().collect(),
    })
    .into_response()
}

/// Look up one topic. Non-numeric ids are a bad request; any numeric id
/// without a topic, including ones too large for a `TopicId`, is not found.
pub async fn get_topic(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Topic>, AppError> {
    let Path(raw) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!("Invalid topic id: {raw:?}")));
    }

    raw.parse::<u16>()
        .ok()
        .and_then(TopicId::new)
        .and_then(|id| state.topics.get(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Topic {raw}")))
}
