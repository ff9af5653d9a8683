//! Demo sign-in, signup, logout and account page gating.

use home_harvest_integration_tests::{TestApp, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_login_with_demo_user() {
    let app = TestApp::spawn().await;
    app.login("user@example.com").await;

    let (_, body) = app.page("/").await;
    assert!(body.contains("Logged in"));
    assert!(body.contains("Welcome back, Regular User!"));
    assert!(body.contains("My Account"));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = TestApp::spawn().await;
    let response = app
        .post_form(
            "/login",
            &[("email", "user@example.com"), ("password", "hunter2")],
        )
        .await;
    assert_eq!(location(&response), "/login");

    let (_, body) = app.page("/login").await;
    assert!(body.contains("Login Failed"));
    assert!(body.contains("Invalid email or password"));
}

#[tokio::test]
async fn test_login_with_blank_fields() {
    let app = TestApp::spawn().await;
    app.post_form("/login", &[("email", ""), ("password", "")])
        .await;

    let (_, body) = app.page("/login").await;
    assert!(body.contains("Validation Error"));
}

#[tokio::test]
async fn test_account_requires_sign_in_and_returns_after_login() {
    let app = TestApp::spawn().await;

    let response = app.get("/account").await;
    assert_eq!(location(&response), "/login?from=%2Faccount");

    let (status, body) = app.page("/login?from=%2Faccount").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("name=\"from\" value=\"/account\""));

    let response = app
        .post_form(
            "/login",
            &[
                ("email", "user@example.com"),
                ("password", "password"),
                ("from", "/account"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/account");

    let (status, body) = app.page("/account").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Profile Information"));
    assert!(body.contains("user@example.com"));
    assert!(body.contains("Customer"));
}

#[tokio::test]
async fn test_login_ignores_offsite_return_path() {
    let app = TestApp::spawn().await;
    let response = app
        .post_form(
            "/login",
            &[
                ("email", "user@example.com"),
                ("password", "password"),
                ("from", "//evil.example"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_signup_then_duplicate_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post_form(
            "/signup",
            &[
                ("name", "Jane Green"),
                ("email", "jane@example.com"),
                ("password", "sprouts"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/");

    let (_, body) = app.page("/account").await;
    assert!(body.contains("Account created"));
    assert!(body.contains("Jane Green"));

    // Registered accounts sign in with the shared demo password, not their own.
    app.post_form("/logout", &[]).await;
    let response = app
        .post_form(
            "/login",
            &[("email", "jane@example.com"), ("password", "sprouts")],
        )
        .await;
    assert_eq!(location(&response), "/login");
    let (_, body) = app.page("/login").await;
    assert!(body.contains("Invalid email or password"));

    let response = app
        .post_form(
            "/login",
            &[("email", "jane@example.com"), ("password", "password")],
        )
        .await;
    assert_eq!(location(&response), "/");
    app.page("/").await;

    let response = app
        .post_form(
            "/signup",
            &[
                ("name", "Jane Again"),
                ("email", "jane@example.com"),
                ("password", "sprouts"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/signup");

    let (_, body) = app.page("/signup").await;
    assert!(body.contains("Sign Up Failed"));
    assert!(body.contains("Email already in use"));
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = TestApp::spawn().await;
    app.post_form(
        "/signup",
        &[
            ("name", "Jane"),
            ("email", "not-an-email"),
            ("password", "sprouts"),
        ],
    )
    .await;

    let (_, body) = app.page("/signup").await;
    assert!(body.contains("Please enter a valid email address."));
}

#[tokio::test]
async fn test_logout() {
    let app = TestApp::spawn().await;
    app.login("user@example.com").await;

    let response = app.post_form("/logout", &[]).await;
    assert_eq!(location(&response), "/");

    let (_, body) = app.page("/").await;
    assert!(body.contains("You have been successfully logged out."));
    assert!(body.contains("Sign In"));

    let response = app.get("/account").await;
    assert!(location(&response).starts_with("/login"));
}

#[tokio::test]
async fn test_dashboard_is_for_admin_users() {
    let app = TestApp::spawn().await;
    app.login("user@example.com").await;

    let response = app.get("/dashboard").await;
    assert_eq!(location(&response), "/account");

    let (status, body) = app.page("/customer-dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome back, Regular!"));
    assert!(body.contains("Garden Veggie Stew"));
}

#[tokio::test]
async fn test_admin_user_sees_dashboard() {
    let app = TestApp::spawn().await;
    app.login("admin@example.com").await;

    let (status, body) = app.page("/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("128"));
    assert!(body.contains("Back to Account"));
}
