//! Simulated checkout.

use home_harvest_integration_tests::{TestApp, location};

#[tokio::test]
async fn test_checkout_requires_sign_in() {
    let app = TestApp::spawn().await;
    app.add_to_cart(1, 1).await;

    let response = app.post_form("/checkout", &[]).await;
    assert_eq!(location(&response), "/login?from=/cart");

    let (_, body) = app.page("/login?from=/cart").await;
    assert!(body.contains("Please sign in"));
    assert!(body.contains("You need to be signed in to checkout."));

    // The cart survives the failed attempt.
    let (_, body) = app.page("/cart").await;
    assert!(body.contains("Quinoa Bowl"));
}

#[tokio::test]
async fn test_checkout_with_empty_cart() {
    let app = TestApp::spawn().await;
    app.login("user@example.com").await;

    let response = app.post_form("/checkout", &[]).await;
    assert_eq!(location(&response), "/cart");

    let (_, body) = app.page("/cart").await;
    assert!(body.contains("Empty cart"));
}

#[tokio::test]
async fn test_checkout_places_order_and_clears_cart() {
    let app = TestApp::spawn().await;
    app.add_to_cart(2, 2).await;
    app.login("user@example.com").await;

    let response = app.post_form("/checkout", &[]).await;
    assert_eq!(location(&response), "/");

    let (_, body) = app.page("/").await;
    assert!(body.contains("Order placed successfully!"));
    assert!(body.contains("Your order ord-"));

    let (_, body) = app.page("/cart").await;
    assert!(body.contains("Your cart is empty"));
}
