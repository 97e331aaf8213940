use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Interview type assigned at creation. A later product phase may let the
/// user pick a type on the job form.
pub const DEFAULT_INTERVIEW_TYPE: &str = "General";
/// Interview duration in minutes assigned at creation.
pub const DEFAULT_DURATION_MINUTES: i32 = 30;

/// The five fixed question classifications. Wire labels are the display
/// names ("Problem Solving" with a space) — these are the only values the
/// generation prompt permits and the only values the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Technical,
    Behavioral,
    Experience,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    Leadership,
}

/// A single generated interview question. Owned exclusively by its containing
/// interview — no independent identity or lifecycle.
///
/// Wire shape: `{ "question": string, "type": <category label> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "type")]
    pub category: QuestionCategory,
}

/// A persisted interview record: one job-application practice session and its
/// generated questions.
///
/// `questions` is either empty (not yet generated) or a fully-formed ordered
/// sequence — it is only ever written as one complete validated array.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub interview_type: String,
    /// Duration in minutes.
    pub duration: i32,
    pub questions: Json<Vec<Question>>,
    pub created_at: DateTime<Utc>,
}
