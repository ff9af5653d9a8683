//! Integration tests for the Home Harvest storefront.
//!
//! Each test spawns the full application (session layer, security headers,
//! routes) on an ephemeral port and drives it over HTTP with a cookie-aware
//! client, so a test behaves like one visitor with one browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p home-harvest-integration-tests
//! ```

use std::net::SocketAddr;

use home_harvest_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::{Client, Response, StatusCode, header::LOCATION, redirect::Policy};

/// A running storefront and a visitor's browser.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    /// Spawn a storefront with simulated latency switched off.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            port: 0,
            simulate_latency: false,
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").into(),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config).expect("Failed to build application state");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        tokio::spawn(async move {
            axum::serve(listener, app::router(state))
                .await
                .expect("Test server error");
        });

        Self {
            addr,
            client: Self::browser(),
        }
    }

    /// A fresh cookie jar that does not follow redirects.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn browser() -> Client {
        Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client")
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// GET `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET `path` and return the status and body.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn page(&self, path: &str) -> (StatusCode, String) {
        let response = self.get(path).await;
        let status = response.status();
        let body = response.text().await.expect("Failed to read body");
        (status, body)
    }

    /// POST a form to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Sign in as one of the demo users.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn login(&self, email: &str) {
        let response = self
            .post_form("/login", &[("email", email), ("password", "password")])
            .await;
        assert_eq!(location(&response), "/", "login as {email} failed");
    }

    /// Sign in to the back office with the default credentials.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn admin_login(&self) {
        let response = self
            .post_form(
                "/admin/login",
                &[("email", "admin@homeharvest.com"), ("password", "admin123")],
            )
            .await;
        assert_eq!(location(&response), "/admin/dashboard");
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Response {
        let product_id = product_id.to_string();
        let quantity = quantity.to_string();
        self.post_form(
            "/cart/add",
            &[
                ("product_id", product_id.as_str()),
                ("quantity", quantity.as_str()),
            ],
        )
        .await
    }
}

/// The `Location` header of a redirect.
///
/// # Panics
///
/// Panics if the response is not a redirect.
#[must_use]
pub fn location(response: &Response) -> &str {
    assert!(
        response.status().is_redirection(),
        "expected a redirect, got {}",
        response.status()
    );
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("redirect without Location")
}
