//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use home_harvest_core::{Category, Product};

use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    /// Products flagged as featured in the catalog.
    pub featured: Vec<Product>,
    pub categories: Vec<Category>,
}

/// Display the home page: hero, featured products, categories, newsletter.
#[instrument(skip(state, ctx))]
pub async fn home(State(state): State<AppState>, ctx: PageContext) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
        ctx,
        featured: catalog.featured().into_iter().cloned().collect(),
        categories: catalog.categories().to_vec(),
    }
}
