//! Session-related types.
//!
//! Everything the storefront remembers about a customer lives in the
//! session: the cart and the address resolved for checkout.

/// Session keys for cart and checkout data.
pub mod keys {
    /// Key for the customer's cart ([`brasa_core::Cart`]).
    pub const CART: &str = "cart";

    /// Key for the resolved delivery address ([`brasa_core::Address`]).
    pub const ADDRESS: &str = "address";
}
