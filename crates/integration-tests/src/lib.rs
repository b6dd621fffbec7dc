//! Integration test harness for the Brasa Burgers storefront.
//!
//! Spawns the real router on an ephemeral port with the external services
//! (ViaCEP, Gemini) pointed at wiremock servers, and drives it over HTTP
//! with a cookie-holding client so the session-scoped cart behaves exactly
//! as it does for a browser.
//!
//! # Example
//!
//! ```rust,ignore
//! let viacep = MockServer::start().await;
//! let gemini = MockServer::start().await;
//! let app = spawn_app(&viacep.uri(), &gemini.uri()).await;
//!
//! let response = app.client
//!     .post(app.url("/cart/add"))
//!     .json(&serde_json::json!({"product_id": "b1"}))
//!     .send()
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};

use secrecy::SecretString;

use brasa_storefront::config::{GeminiConfig, StorefrontConfig};
use brasa_storefront::state::AppState;

/// A running storefront instance plus a session-holding HTTP client.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Spawn the storefront on an ephemeral port.
///
/// `viacep_base` and `gemini_base` should point at wiremock servers.
///
/// # Panics
///
/// Panics if the listener cannot be bound or the client cannot be built;
/// both indicate a broken test environment.
pub async fn spawn_app(viacep_base: &str, gemini_base: &str) -> TestApp {
    let config = StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        store_name: "Brasa Burgers".to_owned(),
        whatsapp_number: "5511973534101".to_owned(),
        gemini: GeminiConfig {
            api_key: SecretString::from("test-key".to_owned()),
            model: "gemini-2.5-flash".to_owned(),
            base_url: gemini_base.to_owned(),
        },
        viacep_base_url: viacep_base.to_owned(),
    };

    let state = AppState::new(config);
    let app = brasa_storefront::app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum_serve(listener, app).await;
    });

    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("build HTTP client");

    TestApp {
        base_url: format!("http://{addr}"),
        client,
    }
}

async fn axum_serve(listener: tokio::net::TcpListener, app: axum::Router) {
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("test server error: {e}");
    }
}
