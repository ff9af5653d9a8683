//! Back office: gating, login, product and inventory forms.

use home_harvest_integration_tests::{TestApp, location};
use reqwest::StatusCode;

#[tokio::test]
async fn test_back_office_requires_admin_session() {
    let app = TestApp::spawn().await;

    for path in [
        "/admin/dashboard",
        "/admin/orders",
        "/admin/customers",
        "/admin/products",
        "/admin/inventory",
    ] {
        let response = app.get(path).await;
        assert_eq!(location(&response), "/admin/login", "{path}");
    }

    let response = app
        .post_form(
            "/admin/products",
            &[("name", "Tea"), ("description", "Green"), ("price", "3")],
        )
        .await;
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_storefront_admin_user_is_not_back_office_admin() {
    let app = TestApp::spawn().await;
    app.login("admin@example.com").await;

    let response = app.get("/admin/dashboard").await;
    assert_eq!(location(&response), "/admin/login");
}

#[tokio::test]
async fn test_login_with_wrong_credentials() {
    let app = TestApp::spawn().await;
    let response = app
        .post_form(
            "/admin/login",
            &[("email", "admin@homeharvest.com"), ("password", "nope")],
        )
        .await;
    assert_eq!(location(&response), "/admin/login");

    let (_, body) = app.page("/admin/login").await;
    assert!(body.contains("Login Failed"));
}

#[tokio::test]
async fn test_login_with_blank_credentials() {
    let app = TestApp::spawn().await;
    app.post_form("/admin/login", &[("email", ""), ("password", "")])
        .await;

    let (_, body) = app.page("/admin/login").await;
    assert!(body.contains("Validation Error"));
    assert!(body.contains("Please enter both email and password."));
}

#[tokio::test]
async fn test_dashboard_and_tables() {
    let app = TestApp::spawn().await;
    app.admin_login().await;

    let (status, body) = app.page("/admin/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Login Successful"));
    assert!(body.contains("Admin Panel"));
    assert!(body.contains("Total Orders"));

    let (_, body) = app.page("/admin/orders").await;
    assert!(body.contains("John Doe"));
    assert!(body.contains("$20.00"));

    let (_, body) = app.page("/admin/customers").await;
    assert!(body.contains("john@example.com"));

    // Already signed in: the login page is skipped.
    let response = app.get("/admin/login").await;
    assert_eq!(location(&response), "/admin/dashboard");
}

#[tokio::test]
async fn test_add_product() {
    let app = TestApp::spawn().await;
    app.admin_login().await;
    app.page("/admin/dashboard").await;

    let response = app
        .post_form(
            "/admin/products",
            &[
                ("name", "Miso Soup"),
                ("description", "Warm and savoury"),
                ("price", "$7.25"),
            ],
        )
        .await;
    assert_eq!(location(&response), "/admin/products");

    let (_, body) = app.page("/admin/products").await;
    assert!(body.contains("Miso Soup has been added to products"));
    assert!(body.contains("$7.25"));
    assert!(body.contains("Garden Veggie Stew"));
}

#[tokio::test]
async fn test_add_product_validation() {
    let app = TestApp::spawn().await;
    app.admin_login().await;
    app.page("/admin/dashboard").await;

    app.post_form(
        "/admin/products",
        &[("name", "Tea"), ("description", ""), ("price", "3")],
    )
    .await;
    let (_, body) = app.page("/admin/products").await;
    assert!(body.contains("Please fill in all fields"));
    assert!(!body.contains("Tea</td>"));

    app.post_form(
        "/admin/products",
        &[("name", "Tea"), ("description", "Green"), ("price", "cheap")],
    )
    .await;
    let (_, body) = app.page("/admin/products").await;
    assert!(body.contains("Validation Error"));
    assert!(!body.contains("Tea</td>"));
}

#[tokio::test]
async fn test_add_ingredient() {
    let app = TestApp::spawn().await;
    app.admin_login().await;
    app.page("/admin/dashboard").await;

    app.post_form(
        "/admin/inventory",
        &[("name", "Garlic"), ("quantity", "0"), ("unit", "bulbs")],
    )
    .await;
    let (_, body) = app.page("/admin/inventory").await;
    assert!(body.contains("Quantity must be a positive number"));

    let response = app
        .post_form(
            "/admin/inventory",
            &[("name", "Garlic"), ("quantity", "12"), ("unit", "bulbs")],
        )
        .await;
    assert_eq!(location(&response), "/admin/inventory");

    let (_, body) = app.page("/admin/inventory").await;
    assert!(body.contains("Garlic has been added to inventory"));
    assert!(body.contains("bulbs"));
}

#[tokio::test]
async fn test_logout() {
    let app = TestApp::spawn().await;
    app.admin_login().await;

    let response = app.post_form("/admin/logout", &[]).await;
    assert_eq!(location(&response), "/admin/login");

    let (_, body) = app.page("/admin/login").await;
    assert!(body.contains("You have been successfully logged out of the admin panel."));

    let response = app.get("/admin/dashboard").await;
    assert_eq!(location(&response), "/admin/login");
}
