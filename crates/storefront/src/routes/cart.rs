//! Cart route handlers.
//!
//! The cart lives in the session: each mutation loads it, applies exactly
//! one engine operation, and writes it back before the response goes out.
//! Within one session there is a single logical writer, so operations never
//! interleave.

use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use brasa_core::{Cart, CartLine, LineId, MoneyFormat};

use crate::error::{AppError, Result};
use crate::models::session::keys;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub line_id: LineId,
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub observation: Option<String>,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    fn from_cart(cart: &Cart, money: &MoneyFormat) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView::from_line(line, money))
                .collect(),
            subtotal: money.format(cart.total_price()),
            item_count: cart.total_items(),
        }
    }
}

impl CartLineView {
    fn from_line(line: &CartLine, money: &MoneyFormat) -> Self {
        Self {
            line_id: line.line_id,
            product_id: line.product.id.to_string(),
            name: line.product.name.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            observation: line.observation.clone(),
            unit_price: money.format(line.product.price),
            line_total: money.format(line.line_total()),
        }
    }
}

// ============================================================================
// Session Helpers
// ============================================================================

/// Load the session's cart, or an empty one for a fresh session.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Write the cart back to the session.
pub(crate) async fn store_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
    pub observation: Option<String>,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub line_id: LineId,
    pub delta: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub line_id: LineId,
}

/// Item-count badge value.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Current cart.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from_cart(&cart, state.money())))
}

/// Add a product to the cart.
///
/// Additions of the same product with the same normalized observation merge
/// into the existing line; a zero quantity is rejected with 422.
#[instrument(skip(state, session, request))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let product_id = brasa_core::ProductId::new(request.product_id);
    let product = state
        .catalog()
        .product(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?
        .clone();

    let mut cart = load_cart(&session).await?;
    cart.add_item(
        product,
        request.quantity.unwrap_or(1),
        request.observation.as_deref(),
    )?;
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::from_cart(&cart, state.money())))
}

/// Adjust a line's quantity by a delta.
///
/// Floor-guarded at 1 by the engine; unknown line IDs are a no-op.
#[instrument(skip(state, session, request))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(request.line_id, request.delta);
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::from_cart(&cart, state.money())))
}

/// Remove a line from the cart. Unknown line IDs are a no-op.
#[instrument(skip(state, session, request))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.remove_item(request.line_id);
    store_cart(&session, &cart).await?;

    Ok(Json(CartView::from_cart(&cart, state.money())))
}

/// Item-count badge value.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountView {
        count: cart.total_items(),
    }))
}
