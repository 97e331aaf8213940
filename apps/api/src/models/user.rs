use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user record, created on first authenticated access by the identity layer.
/// Read-only in the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    /// Opaque id assigned by the external identity provider.
    pub auth_id: String,
    pub skills: Vec<String>,
    /// Years of experience. Non-negative.
    pub experience: i32,
    pub created_at: DateTime<Utc>,
}
