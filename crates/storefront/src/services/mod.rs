//! External service clients.
//!
//! Both collaborators are failure-absorbing at their boundary: the postal
//! lookup normalizes every failure to "no address found" and the chat
//! client falls back to a fixed reply, so neither can break the cart or
//! the UI.

pub mod viacep;
pub mod waiter;

pub use viacep::ViaCepClient;
pub use waiter::{ChatMessage, ChatRole, WaiterClient};
