//! Authentication extractors.
//!
//! Storefront account pages use [`RequireUser`]; the back office
//! uses [`RequireAdmin`], which checks its own session record and is
//! independent of the storefront user.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use home_harvest_core::User;

use crate::models::AdminSession;
use crate::services::{AuthService, Latency};

/// Extractor that requires a signed-in storefront user.
///
/// Redirects to `/login?from=<path>` otherwise.
///
/// # Example
///
/// ```rust,ignore
/// async fn account(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.first_name())
/// }
/// ```
pub struct RequireUser(pub User);

/// Extractor that requires a back-office session.
///
/// Redirects to `/admin/login` otherwise.
pub struct RequireAdmin(pub AdminSession);

/// Rejection for the authentication extractors.
#[derive(Debug)]
pub enum AuthRejection {
    /// Redirect to the storefront login page, then back to `from`.
    RedirectToLogin { from: String },
    /// Redirect to the back-office login page.
    RedirectToAdminLogin,
    /// Session layer missing or unreadable.
    SessionUnavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin { from } => {
                Redirect::to(&format!("/login?from={}", urlencoding::encode(&from)))
                    .into_response()
            }
            Self::RedirectToAdminLogin => Redirect::to("/admin/login").into_response(),
            Self::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Read the signed-in user from the request's session.
async fn session_user(parts: &Parts) -> Result<Option<User>, AuthRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or(AuthRejection::SessionUnavailable)?;

    AuthService::new(session, Latency::disabled())
        .current_user()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to read user from session");
            AuthRejection::SessionUnavailable
        })
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_user(parts)
            .await?
            .map(Self)
            .ok_or_else(|| AuthRejection::RedirectToLogin {
                from: parts
                    .extensions
                    .get::<OriginalUri>()
                    .map_or_else(|| parts.uri.path(), |uri| uri.path())
                    .to_string(),
            })
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AuthRejection::SessionUnavailable)?;

        AuthService::new(session, Latency::disabled())
            .admin_session()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read admin session");
                AuthRejection::SessionUnavailable
            })?
            .map(Self)
            .ok_or(AuthRejection::RedirectToAdminLogin)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::keys;
    use axum::http::header::LOCATION;

    #[test]
    fn test_login_redirect_carries_from() {
        let response = AuthRejection::RedirectToLogin {
            from: "/customer-dashboard".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[LOCATION],
            "/login?from=%2Fcustomer-dashboard"
        );
    }

    #[test]
    fn test_admin_redirect() {
        let response = AuthRejection::RedirectToAdminLogin.into_response();
        assert_eq!(response.headers()[LOCATION], "/admin/login");
    }

    fn parts_with_session(session: Session) -> Parts {
        let (mut parts, ()) = axum::http::Request::builder()
            .uri("/admin/dashboard")
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(session);
        parts
    }

    fn new_session() -> Session {
        Session::new(
            None,
            std::sync::Arc::new(tower_sessions::MemoryStore::default()),
            None,
        )
    }

    #[tokio::test]
    async fn test_require_admin_reads_session() {
        let session = new_session();
        session
            .insert(keys::ADMIN_AUTH, AdminSession::new("admin@homeharvest.com"))
            .await
            .unwrap();
        let mut parts = parts_with_session(session);

        let RequireAdmin(admin) = RequireAdmin::from_request_parts(&mut parts, &())
            .await
            .ok()
            .unwrap();
        assert_eq!(admin.email, "admin@homeharvest.com");
    }

    #[tokio::test]
    async fn test_require_admin_without_record_redirects() {
        let mut parts = parts_with_session(new_session());
        let result = RequireAdmin::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::RedirectToAdminLogin)));
    }

    #[tokio::test]
    async fn test_require_admin_with_unreadable_record_is_server_error() {
        let session = new_session();
        session.insert(keys::ADMIN_AUTH, "not a record").await.unwrap();
        let mut parts = parts_with_session(session);

        let result = RequireAdmin::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::SessionUnavailable)));
    }
}
