//! Checkout route handler.
//!
//! Terminal step of an order: validate, format the order message, and hand
//! back the WhatsApp deep link. The cart is left untouched - after the
//! handoff the system has no further responsibility for the order.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use brasa_core::{Address, format_order, handoff_url};

use crate::error::Result;
use crate::models::session::keys;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub house_number: String,
}

/// Checkout response: the formatted order and the messaging deep link.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub whatsapp_url: String,
}

/// Validate the order and build the messaging handoff.
///
/// Returns 422 with the validation message when the name is blank or no
/// address has been resolved; validation never mutates the cart.
#[instrument(skip(state, session, request))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let cart = load_cart(&session).await?;
    let address = session.get::<Address>(keys::ADDRESS).await?;

    let message = format_order(
        &cart,
        &state.config().store_name,
        &request.customer_name,
        address.as_ref(),
        &request.house_number,
        state.money(),
    )?;
    let whatsapp_url = handoff_url(&state.config().whatsapp_number, &message);

    Ok(Json(CheckoutResponse {
        message,
        whatsapp_url,
    }))
}
