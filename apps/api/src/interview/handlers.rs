//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::AuthId;
use crate::errors::AppError;
use crate::interview::generator::{
    generate_questions, get_interview, save_job_to_interview, SaveJobRequest, SaveJobResponse,
};
use crate::models::interview::{InterviewRow, Question};
use crate::state::AppState;

/// POST /api/v1/interviews
///
/// Saves submitted job details to a new interview record with an empty
/// question list. Generation happens in a separate call.
pub async fn handle_save_job(
    State(state): State<AppState>,
    auth: AuthId,
    Json(request): Json<SaveJobRequest>,
) -> Result<Json<SaveJobResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let response = save_job_to_interview(state.store.as_ref(), &auth.0, request).await?;

    Ok(Json(response))
}

/// POST /api/v1/interviews/:id/questions
///
/// Full generation pipeline: load interview → build prompt → completion →
/// parse → persist. Returns the ordered question list. Safe to re-invoke —
/// a second call overwrites the stored questions with a fresh set.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    auth: AuthId,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<Vec<Question>>, AppError> {
    let questions = generate_questions(
        state.store.as_ref(),
        state.llm.as_ref(),
        &auth.0,
        interview_id,
    )
    .await?;

    Ok(Json(questions))
}

/// GET /api/v1/interviews/:id
///
/// Returns the full interview record. Owner scoping for this read path is
/// controlled by `INTERVIEW_READ_OWNER_SCOPED` (on by default).
pub async fn handle_get_interview(
    State(state): State<AppState>,
    auth: AuthId,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<InterviewRow>, AppError> {
    let interview = get_interview(
        state.store.as_ref(),
        &auth.0,
        interview_id,
        state.config.read_owner_scoped,
    )
    .await?;

    Ok(Json(interview))
}
