//! Back-office ingredient inventory.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::backoffice::{Ingredient, NewIngredient};
use crate::error::Result;
use crate::filters;
use crate::middleware::{PageContext, RequireAdmin};
use crate::models::Toast;
use crate::routes::admin::AdminLayout;
use crate::routes::notify;
use crate::state::AppState;

/// Inventory table template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/inventory.html")]
pub struct AdminInventoryTemplate {
    pub ctx: PageContext,
    pub layout: AdminLayout,
    pub ingredients: Vec<Ingredient>,
}

/// Display the ingredient table and the add form.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    AdminInventoryTemplate {
        ctx,
        layout: AdminLayout::new("Inventory", admin),
        ingredients: state.backoffice().ingredients().await,
    }
}

/// Add an ingredient.
#[instrument(skip(state, session, _admin))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    RequireAdmin(_admin): RequireAdmin,
    Form(form): Form<NewIngredient>,
) -> Result<Redirect> {
    let toast = match state.backoffice().add_ingredient(form).await {
        Ok(ingredient) => Toast::info("Success")
            .with_description(format!("{} has been added to inventory", ingredient.name)),
        Err(err) => Toast::error("Validation Error").with_description(err.to_string()),
    };
    notify(&session, toast).await?;
    Ok(Redirect::to("/admin/inventory"))
}
