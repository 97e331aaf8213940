//! Generation Orchestrator — sequences the question-generation pipeline.
//!
//! Flow: authorize caller → load interview → build prompt → completion call →
//!       parse → persist questions → return.
//!
//! No automatic retries anywhere in this pipeline: a failed generation
//! surfaces to the caller, who resubmits the action. Re-invoking for the same
//! interview overwrites `questions` wholesale — never appends.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::parser::parse_questions;
use crate::interview::prompts::build_question_prompt;
use crate::interview::store::InterviewStore;
use crate::llm_client::{CompletionClient, LlmError};
use crate::models::interview::Question;
use crate::models::user::User;

/// Request body for saving job details to a new interview.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveJobRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
}

/// Response from saving job details.
#[derive(Debug, Clone, Serialize)]
pub struct SaveJobResponse {
    pub interview_id: Uuid,
    pub message: String,
}

/// Creates an interview record from submitted job details. The interview
/// starts with an empty question list, the default type and duration.
pub async fn save_job_to_interview(
    store: &dyn InterviewStore,
    auth_id: &str,
    request: SaveJobRequest,
) -> Result<SaveJobResponse, AppError> {
    let user = resolve_user(store, auth_id).await?;

    let interview = store
        .create_interview(
            user.id,
            &request.job_title,
            &request.company_name,
            &request.job_description,
        )
        .await?;

    info!(
        "Interview {} created for user {} (job: {})",
        interview.id, user.id, interview.job_title
    );

    Ok(SaveJobResponse {
        interview_id: interview.id,
        message: "Job details saved successfully".to_string(),
    })
}

/// Runs the full generation pipeline for an existing interview.
///
/// The caller must own the interview. The interview record is written exactly
/// once, after parsing succeeds — a completion or parse failure leaves the
/// stored questions untouched.
pub async fn generate_questions(
    store: &dyn InterviewStore,
    llm: &dyn CompletionClient,
    auth_id: &str,
    interview_id: Uuid,
) -> Result<Vec<Question>, AppError> {
    let user = resolve_user(store, auth_id).await?;

    let interview = store
        .find_interview(interview_id)
        .await?
        .ok_or(AppError::InterviewNotFound(interview_id))?;

    // Mutation is owner-scoped: only the interview's owner may generate.
    if interview.user_id != user.id {
        return Err(AppError::Unauthorized);
    }

    let prompt = build_question_prompt(&interview, &user);

    let raw = llm.complete(&prompt).await.map_err(|e| match e {
        LlmError::EmptyResponse => AppError::EmptyResponse,
        other => AppError::ServiceUnavailable(other.to_string()),
    })?;

    let questions = parse_questions(&raw)?;

    store.update_questions(interview_id, &questions).await?;

    info!(
        "Generated {} questions for interview {} (user {})",
        questions.len(),
        interview_id,
        user.id
    );

    Ok(questions)
}

/// Fetches an interview by id.
///
/// When `scope_to_owner` is set, a caller who does not own the interview gets
/// `InterviewNotFound` — existence is not revealed to non-owners.
pub async fn get_interview(
    store: &dyn InterviewStore,
    auth_id: &str,
    interview_id: Uuid,
    scope_to_owner: bool,
) -> Result<crate::models::interview::InterviewRow, AppError> {
    let interview = store
        .find_interview(interview_id)
        .await?
        .ok_or(AppError::InterviewNotFound(interview_id))?;

    if scope_to_owner {
        let user = resolve_user(store, auth_id).await?;
        if interview.user_id != user.id {
            return Err(AppError::InterviewNotFound(interview_id));
        }
    }

    Ok(interview)
}

async fn resolve_user(store: &dyn InterviewStore, auth_id: &str) -> Result<User, AppError> {
    store
        .find_user_by_auth_id(auth_id)
        .await?
        .ok_or(AppError::UserNotFound)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
