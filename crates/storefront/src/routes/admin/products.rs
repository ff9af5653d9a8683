//! Back-office product management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::backoffice::{BackofficeProduct, NewProduct};
use crate::error::Result;
use crate::filters;
use crate::middleware::{PageContext, RequireAdmin};
use crate::models::Toast;
use crate::routes::admin::AdminLayout;
use crate::routes::notify;
use crate::state::AppState;

/// Product table template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/products.html")]
pub struct AdminProductsTemplate {
    pub ctx: PageContext,
    pub layout: AdminLayout,
    pub products: Vec<BackofficeProduct>,
}

/// Display the product table and the add form.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    AdminProductsTemplate {
        ctx,
        layout: AdminLayout::new("Products", admin),
        products: state.backoffice().products().await,
    }
}

/// Add a product.
#[instrument(skip(state, session, _admin))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    RequireAdmin(_admin): RequireAdmin,
    Form(form): Form<NewProduct>,
) -> Result<Redirect> {
    let toast = match state.backoffice().add_product(form).await {
        Ok(product) => Toast::info("Success")
            .with_description(format!("{} has been added to products", product.name)),
        Err(err) => Toast::error("Validation Error").with_description(err.to_string()),
    };
    notify(&session, toast).await?;
    Ok(Redirect::to("/admin/products"))
}
