//! Interview Record Store — persistence operations consumed by the
//! generation orchestrator.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{
    InterviewRow, Question, DEFAULT_DURATION_MINUTES, DEFAULT_INTERVIEW_TYPE,
};
use crate::models::user::User;

/// Create/find/update operations on interview and user records.
///
/// The orchestrator depends on this trait; the production implementation is
/// Postgres-backed. Owner-scoping is enforced by the orchestrator, not here.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    /// Creates an interview with empty questions, the default type and the
    /// default duration.
    async fn create_interview(
        &self,
        owner_id: Uuid,
        job_title: &str,
        company_name: &str,
        job_description: &str,
    ) -> Result<InterviewRow, AppError>;

    async fn find_interview(&self, id: Uuid) -> Result<Option<InterviewRow>, AppError>;

    async fn find_user_by_auth_id(&self, auth_id: &str) -> Result<Option<User>, AppError>;

    /// Replaces the interview's question list wholesale in a single atomic
    /// UPDATE. Never appends — a second generation overwrites the first.
    async fn update_questions(
        &self,
        id: Uuid,
        questions: &[Question],
    ) -> Result<InterviewRow, AppError>;
}

/// Postgres-backed store.
pub struct PgInterviewStore {
    pool: PgPool,
}

impl PgInterviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewStore for PgInterviewStore {
    async fn create_interview(
        &self,
        owner_id: Uuid,
        job_title: &str,
        company_name: &str,
        job_description: &str,
    ) -> Result<InterviewRow, AppError> {
        let interview = sqlx::query_as::<_, InterviewRow>(
            r#"
            INSERT INTO interviews
                (id, user_id, job_title, company_name, job_description,
                 interview_type, duration, questions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(job_title)
        .bind(company_name)
        .bind(job_description)
        .bind(DEFAULT_INTERVIEW_TYPE)
        .bind(DEFAULT_DURATION_MINUTES)
        .bind(Json(Vec::<Question>::new()))
        .fetch_one(&self.pool)
        .await?;

        Ok(interview)
    }

    async fn find_interview(&self, id: Uuid) -> Result<Option<InterviewRow>, AppError> {
        let interview =
            sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(interview)
    }

    async fn find_user_by_auth_id(&self, auth_id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE auth_id = $1")
            .bind(auth_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update_questions(
        &self,
        id: Uuid,
        questions: &[Question],
    ) -> Result<InterviewRow, AppError> {
        let interview = sqlx::query_as::<_, InterviewRow>(
            "UPDATE interviews SET questions = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Json(questions))
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::InterviewNotFound(id))?;

        Ok(interview)
    }
}
