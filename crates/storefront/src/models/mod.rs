//! Storefront-local model types.

pub mod session;
