//! Checkout route handler.

use axum::{extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::Toast;
use crate::routes::notify;
use crate::services::{CheckoutError, CheckoutService};
use crate::state::AppState;

/// Place an order for the cart contents.
///
/// Signed-out visitors are sent to the login page, which returns them to the
/// cart afterwards. Nothing is cleared unless the order goes through.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    match CheckoutService::new(&session, state.latency())
        .place_order()
        .await
    {
        Ok(order) => {
            notify(
                &session,
                Toast::info("Order placed successfully!").with_description(format!(
                    "Your order {} has been placed and will be processed shortly.",
                    order.id.reference()
                )),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(CheckoutError::Store(e)) => Err(e.into()),
        Err(err) => {
            let redirect = match err {
                CheckoutError::SignInRequired => "/login?from=/cart",
                _ => "/cart",
            };
            notify(
                &session,
                Toast::error(err.to_string()).with_description(err.description()),
            )
            .await?;
            Ok(Redirect::to(redirect))
        }
    }
}
