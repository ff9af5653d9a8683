//! Newsletter signup, with and without HTMX.

use home_harvest_integration_tests::{TestApp, location};
use reqwest::StatusCode;

async fn htmx_subscribe(app: &TestApp, email: &str) -> (StatusCode, String) {
    let response = app
        .client
        .post(app.url("/newsletter"))
        .header("HX-Request", "true")
        .form(&[("email", email)])
        .send()
        .await
        .expect("POST request failed");
    let status = response.status();
    (status, response.text().await.expect("Failed to read body"))
}

#[tokio::test]
async fn test_htmx_subscribe_returns_fragment() {
    let app = TestApp::spawn().await;
    let (status, body) = htmx_subscribe(&app, "fan@example.com").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("added to our newsletter"));
    assert!(!body.contains("<html"));
}

#[tokio::test]
async fn test_htmx_subscribe_invalid_email_keeps_input() {
    let app = TestApp::spawn().await;
    let (status, body) = htmx_subscribe(&app, "fan@localhost").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("value=\"fan@localhost\""));
}

#[tokio::test]
async fn test_plain_form_subscribe_redirects_with_toast() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form("/newsletter", &[("email", "fan@example.com")])
        .await;
    assert_eq!(location(&response), "/#newsletter");

    let (_, body) = app.page("/").await;
    assert!(body.contains("Success!"));

    app.post_form("/newsletter", &[("email", "  ")]).await;
    let (_, body) = app.page("/").await;
    assert!(body.contains("Please enter your email address."));
}
