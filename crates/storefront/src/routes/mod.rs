//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /menu                   - Full menu, grouped by category
//! GET  /products/{id}          - Product detail
//!
//! # Cart (session-scoped)
//! GET  /cart                   - Current cart
//! POST /cart/add               - Add a product (merges on same observation)
//! POST /cart/update            - Adjust a line's quantity by a delta
//! POST /cart/remove            - Remove a line
//! GET  /cart/count             - Item-count badge value
//!
//! # Checkout
//! GET  /address/{code}         - Resolve a postal code, remember the result
//! POST /checkout               - Validate and build the WhatsApp handoff
//!
//! # Chat
//! POST /chat                   - One stateless round trip with the waiter
//! ```

pub mod address;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(catalog::menu))
        .route("/products/{id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/count", get(cart::count))
}

/// Create the checkout routes router (address lookup + handoff).
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/address/{code}", get(address::lookup))
        .route("/checkout", post(checkout::submit))
}

/// Create the chat routes router.
pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat::send))
}

/// Merge all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .merge(cart_routes())
        .merge(checkout_routes())
        .merge(chat_routes())
}
