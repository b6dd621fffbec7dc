//! ViaCEP postal-code lookup client.
//!
//! Wraps the public `viacep.com.br` API. The caller never sees an error:
//! malformed input short-circuits without touching the network, and any
//! transport, status, or parse failure is indistinguishable from a valid
//! "unknown postal code" answer - both come back as `None`.

use std::time::Duration;

use serde::Deserialize;
use tracing::instrument;

use brasa_core::Address;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the ViaCEP postal-code API.
///
/// Construct with the production base URL from configuration, or point it
/// at a mock server in tests.
#[derive(Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

/// Successful lookup payload. ViaCEP reports unknown codes with an
/// `{"erro": true}` body instead of an error status, which is handled
/// before this shape is parsed.
#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    cep: String,
    logradouro: String,
    bairro: String,
    localidade: String,
    uf: String,
}

/// Keep only digits; exactly 8 of them make a well-formed postal code.
///
/// Anything else returns `None`, and the caller must not issue a lookup.
#[must_use]
pub fn sanitize_postal_code(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == 8).then_some(digits)
}

impl ViaCepClient {
    /// Create a new client against the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Resolve a postal code to an address.
    ///
    /// Returns `None` for malformed codes (without any network call),
    /// unknown codes, and every failure mode of the call itself.
    #[instrument(skip(self))]
    pub async fn lookup(&self, postal_code: &str) -> Option<Address> {
        let code = sanitize_postal_code(postal_code)?;

        match self.fetch(&code).await {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!("postal code lookup failed for {code}: {e}");
                None
            }
        }
    }

    async fn fetch(&self, code: &str) -> Result<Option<Address>, reqwest::Error> {
        let url = format!("{}/ws/{code}/json/", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        // Unknown postal codes come back as 200 with an error flag.
        if body.get("erro").is_some() {
            return Ok(None);
        }

        let Ok(payload) = serde_json::from_value::<ViaCepPayload>(body) else {
            return Ok(None);
        };

        Ok(Some(Address {
            postal_code: payload.cep,
            street: payload.logradouro,
            neighborhood: payload.bairro,
            city: payload.localidade,
            region: payload.uf,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_accepts_exactly_eight_digits() {
        assert_eq!(
            sanitize_postal_code("01310100"),
            Some("01310100".to_owned())
        );
        assert_eq!(
            sanitize_postal_code("01310-100"),
            Some("01310100".to_owned())
        );
    }

    #[test]
    fn sanitize_rejects_short_long_and_empty_input() {
        assert_eq!(sanitize_postal_code("1234"), None);
        assert_eq!(sanitize_postal_code("013101001"), None);
        assert_eq!(sanitize_postal_code(""), None);
        assert_eq!(sanitize_postal_code("abcdefgh"), None);
    }
}
