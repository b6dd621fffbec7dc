//! Application state shared across handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tower_sessions::session::Id;

use brasa_core::{Catalog, MoneyFormat};

use crate::config::StorefrontConfig;
use crate::services::{ViaCepClient, WaiterClient};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the immutable catalog, the external
/// service clients, and configuration. Per-customer cart state lives in the
/// session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    viacep: ViaCepClient,
    waiter: WaiterClient,
    money: MoneyFormat,
    lookup_tokens: Mutex<HashMap<Id, u64>>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::standard();
        let viacep = ViaCepClient::new(&config.viacep_base_url);
        let waiter = WaiterClient::new(&config.gemini, &catalog);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                viacep,
                waiter,
                money: MoneyFormat::default(),
                lookup_tokens: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the postal-code lookup client.
    #[must_use]
    pub fn viacep(&self) -> &ViaCepClient {
        &self.inner.viacep
    }

    /// Get a reference to the chat assistant client.
    #[must_use]
    pub fn waiter(&self) -> &WaiterClient {
        &self.inner.waiter
    }

    /// Get the currency rendering policy for this deployment.
    #[must_use]
    pub fn money(&self) -> &MoneyFormat {
        &self.inner.money
    }

    /// Claim the next address-lookup token for a session.
    ///
    /// The counter lives here rather than in the session record so that
    /// concurrent requests for the same session observe each other's claims.
    pub fn claim_lookup_token(&self, session_id: Id) -> u64 {
        let mut tokens = self
            .inner
            .lookup_tokens
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let token = tokens.entry(session_id).or_insert(0);
        *token += 1;
        *token
    }

    /// Whether `token` is still the most recently claimed lookup token for
    /// the session. A lookup whose token has been superseded must discard
    /// its result.
    #[must_use]
    pub fn lookup_token_is_current(&self, session_id: Id, token: u64) -> bool {
        let tokens = self
            .inner
            .lookup_tokens
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        tokens.get(&session_id) == Some(&token)
    }
}
