//! Newsletter signup route handler.
//!
//! HTMX requests get a fragment that replaces the form; plain form posts
//! get a toast and a redirect home.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::Toast;
use crate::routes::notify;
use crate::services::newsletter::SUBSCRIBED_MESSAGE;
use crate::services::NewsletterService;
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Success fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_success.html")]
pub struct SubscribeSuccessTemplate {
    pub message: &'static str,
}

/// Error fragment template (re-renders the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_error.html")]
pub struct SubscribeErrorTemplate {
    pub message: String,
    pub email: String,
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Subscribe to the newsletter.
#[instrument(skip(state, session, headers))]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    let result = NewsletterService::new(state.latency())
        .subscribe(&form.email)
        .await;

    if is_htmx(&headers) {
        return Ok(match result {
            Ok(_) => SubscribeSuccessTemplate {
                message: SUBSCRIBED_MESSAGE,
            }
            .into_response(),
            Err(err) => SubscribeErrorTemplate {
                message: err.to_string(),
                email: form.email,
            }
            .into_response(),
        });
    }

    let toast = match result {
        Ok(_) => Toast::info("Success!").with_description(SUBSCRIBED_MESSAGE),
        Err(err) => Toast::error("Error").with_description(err.to_string()),
    };
    notify(&session, toast).await?;
    Ok(Redirect::to("/#newsletter").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }
}
