//! Caller identity extraction.
//!
//! Authentication itself is an external collaborator: an identity layer in
//! front of this service verifies the session and injects the opaque user id
//! as a request header. This module only resolves that id.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;

/// Header carrying the opaque authenticated-user id.
pub const AUTH_HEADER: &str = "x-auth-id";

/// The authenticated caller's opaque id. Rejects with `Unauthorized` when the
/// header is missing or blank.
#[derive(Debug, Clone)]
pub struct AuthId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| AuthId(value.to_string()))
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(request: Request<()>) -> Result<AuthId, AppError> {
        let (mut parts, _) = request.into_parts();
        AuthId::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_present_header_is_extracted() {
        let request = Request::builder()
            .header(AUTH_HEADER, "user-abc-123")
            .body(())
            .unwrap();

        let auth = extract(request).await.unwrap();
        assert_eq!(auth.0, "user-abc-123");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_blank_header_is_unauthorized() {
        let request = Request::builder()
            .header(AUTH_HEADER, "   ")
            .body(())
            .unwrap();

        let result = extract(request).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
