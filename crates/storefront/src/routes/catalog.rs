//! Catalog route handlers.
//!
//! The menu is static, so these handlers only shape the compiled-in catalog
//! into client-facing views with rendered prices.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use brasa_core::{MoneyFormat, Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    /// Rendered with the deployment's currency policy, e.g. "R$ 28,00".
    pub price: String,
    pub image: String,
}

impl ProductView {
    fn from_product(product: &Product, money: &MoneyFormat) -> Self {
        Self {
            id: product.id.to_string(),
            category_id: product.category_id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: money.format(product.price),
            image: product.image.clone(),
        }
    }
}

/// One menu section: a category with its products in menu order.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSectionView {
    pub id: String,
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Full menu, grouped by category.
#[instrument(skip(state))]
pub async fn menu(State(state): State<AppState>) -> Json<Vec<MenuSectionView>> {
    let catalog = state.catalog();
    let money = state.money();

    let sections = catalog
        .categories()
        .iter()
        .map(|category| MenuSectionView {
            id: category.id.to_string(),
            name: category.name.clone(),
            products: catalog
                .products_in(&category.id)
                .map(|p| ProductView::from_product(p, money))
                .collect(),
        })
        .collect();

    Json(sections)
}

/// Product detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductView>> {
    let product_id = ProductId::new(id);
    state
        .catalog()
        .product(&product_id)
        .map(|p| Json(ProductView::from_product(p, state.money())))
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))
}
