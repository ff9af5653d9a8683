//! Static page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::PageContext;

/// A garden ingredient featured on the cooking page.
pub struct GardenIngredient {
    pub name: &'static str,
    pub description: &'static str,
}

static GARDEN: [GardenIngredient; 3] = [
    GardenIngredient {
        name: "Tomatoes",
        description: "Home-grown and ripe",
    },
    GardenIngredient {
        name: "Basil",
        description: "Fresh from our herb patch",
    },
    GardenIngredient {
        name: "Carrots",
        description: "Pulled from our soil",
    },
];

/// "How we cook" page template, also served as `/about`.
#[derive(Template, WebTemplate)]
#[template(path = "pages/how_we_cook.html")]
pub struct HowWeCookTemplate {
    pub ctx: PageContext,
    pub garden: &'static [GardenIngredient],
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

/// Display the cooking process page.
#[instrument(skip(ctx))]
pub async fn how_we_cook(ctx: PageContext) -> impl IntoResponse {
    HowWeCookTemplate { ctx, garden: &GARDEN }
}

/// Fallback for unknown paths.
#[instrument(skip(ctx), fields(path = %ctx.path))]
pub async fn not_found(ctx: PageContext) -> impl IntoResponse {
    tracing::info!("Unknown route requested");
    (StatusCode::NOT_FOUND, NotFoundTemplate { ctx })
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}
