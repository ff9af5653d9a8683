//! Account and dashboard route handlers.
//!
//! All pages here need a signed-in storefront user; `/dashboard` also needs
//! the admin flag and sends everyone else to their account page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::instrument;

use home_harvest_core::User;

use crate::catalog::{SalesPoint, SampleOrder, StoreMetrics};
use crate::filters;
use crate::middleware::{PageContext, RequireUser};
use crate::state::AppState;

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub ctx: PageContext,
    pub user: User,
}

/// Admin-user dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "account/dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub metrics: StoreMetrics,
    pub sales: Vec<SalesBar>,
}

/// Customer dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "account/customer_dashboard.html")]
pub struct CustomerDashboardTemplate {
    pub ctx: PageContext,
    pub user: User,
    pub orders: Vec<SampleOrder>,
}

/// One bar of the sales chart.
#[derive(Debug, Clone)]
pub struct SalesBar {
    pub label: String,
    pub amount: String,
    pub orders: u32,
    /// Bar height as a percentage of the best day.
    pub height: u32,
}

impl SalesBar {
    /// Scale every point against the highest amount.
    fn chart(points: &[SalesPoint]) -> Vec<Self> {
        let best = points
            .iter()
            .map(|p| p.amount.amount())
            .max()
            .unwrap_or_default();

        points
            .iter()
            .map(|point| {
                let height = if best.is_zero() {
                    0
                } else {
                    (point.amount.amount() * Decimal::ONE_HUNDRED / best)
                        .round()
                        .to_u32()
                        .unwrap_or(0)
                };
                Self {
                    label: point.date.format("%b %-d").to_string(),
                    amount: point.amount.to_string(),
                    orders: point.orders,
                    height,
                }
            })
            .collect()
    }
}

/// Display the account page.
#[instrument(skip(ctx, user))]
pub async fn index(ctx: PageContext, RequireUser(user): RequireUser) -> impl IntoResponse {
    AccountTemplate { ctx, user }
}

/// Display the admin-user dashboard.
#[instrument(skip(state, ctx, user))]
pub async fn dashboard(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireUser(user): RequireUser,
) -> Response {
    if !user.is_admin {
        return Redirect::to("/account").into_response();
    }

    let catalog = state.catalog();
    DashboardTemplate {
        ctx,
        metrics: catalog.metrics().clone(),
        sales: SalesBar::chart(catalog.sales()),
    }
    .into_response()
}

/// Display the customer dashboard.
#[instrument(skip(state, ctx, user))]
pub async fn customer_dashboard(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireUser(user): RequireUser,
) -> impl IntoResponse {
    CustomerDashboardTemplate {
        ctx,
        user,
        orders: state.catalog().sample_orders().to_vec(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_sales_chart_scales_to_best_day() {
        let catalog = Catalog::load().unwrap();
        let bars = SalesBar::chart(catalog.sales());

        assert_eq!(bars.len(), 7);
        assert_eq!(bars.iter().map(|b| b.height).max(), Some(100));
        assert!(bars.iter().all(|b| b.height <= 100));
    }

    #[test]
    fn test_sales_chart_empty() {
        assert!(SalesBar::chart(&[]).is_empty());
    }
}
