//! Back-office login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Toast;
use crate::routes::notify;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Back-office login form data.
#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Back-office login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub ctx: PageContext,
}

/// Display the login page, or skip it when already signed in.
#[instrument(skip(state, session, ctx))]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
    ctx: PageContext,
) -> Result<Response> {
    if AuthService::new(&session, state.latency())
        .admin_session()
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/admin/dashboard").into_response());
    }
    Ok(AdminLoginTemplate { ctx }.into_response())
}

/// Handle login form submission.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdminLoginForm>,
) -> Result<Redirect> {
    let result = AuthService::new(&session, state.latency())
        .admin_login(&state.config().admin, &form.email, &form.password)
        .await;

    match result {
        Ok(_) => {
            notify(
                &session,
                Toast::info("Login Successful").with_description("Welcome to the admin dashboard."),
            )
            .await?;
            Ok(Redirect::to("/admin/dashboard"))
        }
        Err(AuthError::Store(e)) => Err(AppError::Store(e)),
        Err(err) => {
            let title = if matches!(err, AuthError::MissingCredentials) {
                "Validation Error"
            } else {
                "Login Failed"
            };
            notify(&session, Toast::error(title).with_description(err.to_string())).await?;
            Ok(Redirect::to("/admin/login"))
        }
    }
}

/// Leave the back office.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    AuthService::new(&session, state.latency())
        .admin_logout()
        .await?;
    notify(
        &session,
        Toast::info("Logged out")
            .with_description("You have been successfully logged out of the admin panel."),
    )
    .await?;
    Ok(Redirect::to("/admin/login"))
}
