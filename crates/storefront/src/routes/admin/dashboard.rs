//! Back-office dashboard and read-only tables.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::backoffice::{BackofficeMetrics, CustomerRow, OrderRow};
use crate::filters;
use crate::middleware::{PageContext, RequireAdmin};
use crate::routes::admin::AdminLayout;
use crate::state::AppState;

/// Dashboard card.
pub struct DashboardCard {
    pub title: &'static str,
    pub value: usize,
    pub label: &'static str,
    pub path: &'static str,
}

impl DashboardCard {
    fn all(metrics: BackofficeMetrics) -> Vec<Self> {
        vec![
            Self {
                title: "Orders",
                value: metrics.orders,
                label: "Total Orders",
                path: "/admin/orders",
            },
            Self {
                title: "Customers",
                value: metrics.customers,
                label: "Registered Users",
                path: "/admin/customers",
            },
            Self {
                title: "Products",
                value: metrics.products,
                label: "Available Items",
                path: "/admin/products",
            },
            Self {
                title: "Inventory",
                value: metrics.ingredients,
                label: "Ingredients",
                path: "/admin/inventory",
            },
        ]
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub ctx: PageContext,
    pub layout: AdminLayout,
    pub cards: Vec<DashboardCard>,
}

/// Order log template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/orders.html")]
pub struct AdminOrdersTemplate {
    pub ctx: PageContext,
    pub layout: AdminLayout,
    pub orders: Vec<OrderRow>,
}

/// Customer list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/customers.html")]
pub struct AdminCustomersTemplate {
    pub ctx: PageContext,
    pub layout: AdminLayout,
    pub customers: Vec<CustomerRow>,
}

/// Display the dashboard.
#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    let metrics = state.backoffice().metrics().await;
    AdminDashboardTemplate {
        ctx,
        layout: AdminLayout::new("Dashboard", admin),
        cards: DashboardCard::all(metrics),
    }
}

/// Display the order log.
#[instrument(skip_all)]
pub async fn orders(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    AdminOrdersTemplate {
        ctx,
        layout: AdminLayout::new("Orders", admin),
        orders: state.backoffice().orders().await,
    }
}

/// Display the customer list.
#[instrument(skip_all)]
pub async fn customers(
    State(state): State<AppState>,
    ctx: PageContext,
    RequireAdmin(admin): RequireAdmin,
) -> impl IntoResponse {
    AdminCustomersTemplate {
        ctx,
        layout: AdminLayout::new("Customers", admin),
        customers: state.backoffice().customers().await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backoffice::Backoffice;
    use crate::models::AdminSession;

    fn ctx(path: &str) -> PageContext {
        PageContext {
            path: path.to_string(),
            ..PageContext::default()
        }
    }

    #[tokio::test]
    async fn test_orders_page_renders_inside_admin_layout() {
        let backoffice = Backoffice::seeded().unwrap();
        let html = AdminOrdersTemplate {
            ctx: ctx("/admin/orders"),
            layout: AdminLayout::new("Orders", AdminSession::new("admin@homeharvest.com")),
            orders: backoffice.orders().await,
        }
        .render()
        .unwrap();

        assert!(html.contains("<title>Orders | Home Harvest Admin</title>"));
        assert!(html.contains("Admin Panel"));
        assert!(html.contains("admin@homeharvest.com"));
        assert!(html.contains("John Doe"));
        assert!(html.contains("/static/css/derived/main."));
    }

    #[test]
    fn test_dashboard_cards_follow_metrics() {
        let cards = DashboardCard::all(BackofficeMetrics {
            orders: 1,
            customers: 2,
            products: 3,
            ingredients: 4,
        });
        let values: Vec<usize> = cards.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!(cards[3].path, "/admin/inventory");
    }
}
