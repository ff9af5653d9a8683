//! Authentication route handlers.
//!
//! Demo sign-in, registration and sign-out for storefront users. Failures
//! come back as a toast on the same form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::routes::{local_path, notify};
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Where to go after signing in.
    pub from: Option<String>,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub from: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    /// Local path to return to, echoed in a hidden field.
    pub from: Option<String>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub ctx: PageContext,
}

/// Toast title for a failed form submission.
const fn failure_title(err: &AuthError, fallback: &'static str) -> &'static str {
    match err {
        AuthError::MissingCredentials | AuthError::MissingFields => "Validation Error",
        _ => fallback,
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(ctx))]
pub async fn login_page(ctx: PageContext, Query(query): Query<LoginQuery>) -> impl IntoResponse {
    LoginTemplate {
        ctx,
        from: local_path(query.from.as_deref()).map(String::from),
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect> {
    let from = local_path(form.from.as_deref());

    match AuthService::new(&session, state.latency())
        .login(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            notify(
                &session,
                Toast::info("Logged in").with_description(format!("Welcome back, {}!", user.name)),
            )
            .await?;
            Ok(Redirect::to(from.unwrap_or("/")))
        }
        Err(err) if err.is_user_error() => {
            tracing::info!(reason = %err, "Login failed");
            notify(
                &session,
                Toast::error(failure_title(&err, "Login Failed")).with_description(err.to_string()),
            )
            .await?;
            let back = from.map_or_else(
                || "/login".to_string(),
                |from| format!("/login?from={}", urlencoding::encode(from)),
            );
            Ok(Redirect::to(&back))
        }
        Err(err) => Err(AppError::Auth(err)),
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip(ctx))]
pub async fn signup_page(ctx: PageContext) -> impl IntoResponse {
    SignupTemplate { ctx }
}

/// Handle signup form submission.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Redirect> {
    match AuthService::new(&session, state.latency())
        .register(&form.name, &form.email, &form.password)
        .await
    {
        Ok(user) => {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            notify(
                &session,
                Toast::info("Account created").with_description(format!("Welcome, {}!", user.name)),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(err) if err.is_user_error() => {
            tracing::info!(reason = %err, "Signup failed");
            notify(
                &session,
                Toast::error(failure_title(&err, "Sign Up Failed"))
                    .with_description(err.to_string()),
            )
            .await?;
            Ok(Redirect::to("/signup"))
        }
        Err(err) => Err(AppError::Auth(err)),
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Sign out and return to the home page.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    AuthService::new(&session, state.latency()).logout().await?;
    clear_sentry_user();
    notify(
        &session,
        Toast::info("Logged out").with_description("You have been successfully logged out."),
    )
    .await?;
    Ok(Redirect::to("/"))
}
