//! Brasa Core - Domain library for the Brasa Burgers storefront.
//!
//! This crate holds the menu catalog, the cart engine, and the checkout
//! message formatter used by the `storefront` service. It contains only
//! types and pure logic - no I/O, no HTTP clients - so it can be tested
//! without any running services.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money formatting, and
//!   resolved delivery addresses
//! - [`catalog`] - The compiled-in menu (categories and products)
//! - [`cart`] - Session-scoped cart with merge-by-configuration semantics
//! - [`checkout`] - Order message formatting and the messaging handoff URL

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use catalog::{Catalog, Category, Product};
pub use checkout::{CheckoutError, format_order, handoff_url};
pub use types::*;
